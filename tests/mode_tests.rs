use sciutils::handle::capabilities::FileLike;
use sciutils::handle::gzip::GzFile;
use sciutils::handle::mapped::MappedFile;
use sciutils::handle::plain::FileHandle;
use sciutils::handle::FileObj;
use sciutils::mode::fileobj_mode;
use std::fs;
use std::io::Write;
use std::path::PathBuf;

fn temp(name: &str) -> PathBuf {
    fs::create_dir_all("test_files").unwrap();
    PathBuf::from("test_files").join(name)
}

fn remove_file_if_exists(path: &PathBuf) {
    let _ = fs::remove_file(path);
}

fn detected(handle: &impl FileLike) -> String {
    fileobj_mode(handle).expect("mode should be detected").to_string()
}

#[test]
fn unopened_path_has_no_mode() {
    // A bare path means the file is simply not opened yet.
    assert!(fileobj_mode(&FileObj::unopened("tmp1.dat")).is_none());
}

#[test]
fn plain_file_modes_are_normalized() {
    // Tuples are: file number, given mode, detected mode. The file number
    // matters because read modes expect the file to exist.
    let cases = [
        (0, "a", "a"),
        (0, "a+", "a+"),
        (0, "ab", "ab"),
        (0, "a+b", "ab+"),
        (0, "ab+", "ab+"),
        (0, "w", "w"),
        (0, "wb", "wb"),
        (0, "w+", "w+"),
        (0, "wb+", "wb+"),
        (1, "r", "r"),
        (1, "rb", "rb"),
        (1, "r+", "r+"),
        (1, "rb+", "rb+"),
    ];
    for (num, given, expect) in cases {
        let path = temp(&format!("mode_plain_{num}.dat"));
        if num == 1 && !path.exists() {
            fs::write(&path, b"data").unwrap();
        }
        let handle = FileHandle::open(&path, given.parse().unwrap()).unwrap();
        assert_eq!(detected(&handle), expect, "given mode {given:?}");
    }
}

#[test]
fn exclusive_create_modes() {
    for (name, given, expect) in [
        ("mode_x0.dat", "x", "x"),
        ("mode_x1.dat", "xb", "xb"),
        ("mode_x2.dat", "x+b", "xb+"),
    ] {
        let path = temp(name);
        remove_file_if_exists(&path);
        let handle = FileHandle::open(&path, given.parse().unwrap()).unwrap();
        assert_eq!(detected(&handle), expect, "given mode {given:?}");
        remove_file_if_exists(&path);
    }
}

#[test]
fn gzip_streams_always_report_binary() {
    // Append and write create the file; read needs an existing gzip
    // member; exclusive create needs the file to not exist.
    let read_path = temp("mode_gz_read.gz");
    {
        let mut gz = GzFile::open(&read_path, "w".parse().unwrap()).unwrap();
        gz.write_all(b"payload").unwrap();
        gz.finish().unwrap();
    }

    let cases = [
        ("mode_gz_0.gz", "a", "ab"),
        ("mode_gz_0.gz", "ab", "ab"),
        ("mode_gz_0.gz", "w", "wb"),
        ("mode_gz_0.gz", "wb", "wb"),
        ("mode_gz_read.gz", "r", "rb"),
        ("mode_gz_read.gz", "rb", "rb"),
    ];
    for (name, given, expect) in cases {
        let handle = GzFile::open(temp(name), given.parse().unwrap()).unwrap();
        assert_eq!(detected(&handle), expect, "given mode {given:?}");
    }

    let fresh = temp("mode_gz_x.gz");
    remove_file_if_exists(&fresh);
    let handle = GzFile::open(&fresh, "x".parse().unwrap()).unwrap();
    assert_eq!(detected(&handle), "xb");
    remove_file_if_exists(&fresh);
}

#[test]
fn mapped_files_read_as_binary() {
    let path = temp("mode_mapped.dat");
    fs::write(&path, b"0123456789").unwrap();
    let mapped = MappedFile::open(&path).unwrap();
    assert_eq!(mapped.len(), 10);
    assert_eq!(mapped.bytes(), b"0123456789");
    assert_eq!(detected(&mapped), "rb");
}

#[test]
fn family_enum_delegates_detection() {
    let path = temp("mode_family.dat");
    let handle = FileHandle::open(&path, "wb".parse().unwrap()).unwrap();
    assert_eq!(detected(&FileObj::from(handle)), "wb");
}

#[cfg(unix)]
mod adopted {
    use super::*;
    use std::fs::OpenOptions;

    // Handles adopted from a raw `File` have no recorded mode, so the
    // detection falls back to probing the descriptor flags.

    #[test]
    fn read_only_descriptor() {
        let path = temp("adopted_r.dat");
        fs::write(&path, b"data").unwrap();
        let handle = FileHandle::from_raw(fs::File::open(&path).unwrap());
        assert_eq!(detected(&handle), "rb");
    }

    #[test]
    fn write_only_descriptor() {
        let path = temp("adopted_w.dat");
        let file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&path)
            .unwrap();
        assert_eq!(detected(&FileHandle::from_raw(file)), "wb");
    }

    #[test]
    fn append_descriptor() {
        let path = temp("adopted_a.dat");
        let file = OpenOptions::new().append(true).create(true).open(&path).unwrap();
        assert_eq!(detected(&FileHandle::from_raw(file)), "ab");
    }

    #[test]
    fn read_write_descriptor() {
        let path = temp("adopted_rw.dat");
        fs::write(&path, b"data").unwrap();
        let file = OpenOptions::new().read(true).write(true).open(&path).unwrap();
        assert_eq!(detected(&FileHandle::from_raw(file)), "rb+");
    }

    #[test]
    fn append_read_descriptor() {
        let path = temp("adopted_ar.dat");
        let file = OpenOptions::new()
            .read(true)
            .append(true)
            .create(true)
            .open(&path)
            .unwrap();
        assert_eq!(detected(&FileHandle::from_raw(file)), "ab+");
    }
}
