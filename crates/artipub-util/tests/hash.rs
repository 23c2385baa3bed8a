use artipub_util::hash::{md5_bytes, sha1_bytes, sha256_bytes, Checksums};

#[test]
fn test_sha256_bytes_empty() {
    assert_eq!(
        sha256_bytes(b""),
        "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
    );
}

#[test]
fn test_sha1_bytes_hello() {
    assert_eq!(
        sha1_bytes(b"hello"),
        "aaf4c61ddcc5e8a2dabede0f3b482cd9aea9434d"
    );
}

#[test]
fn test_md5_bytes_hello() {
    assert_eq!(md5_bytes(b"hello"), "5d41402abc4b2a76b9719d911017c592");
}

#[test]
fn test_checksums_of_matches_individual_digests() {
    let sums = Checksums::of(b"hello");
    assert_eq!(
        sums.sha256,
        "2cf24dba5fb0a30e26e83b2ac5b9e29e1b161e5c1fa7425e73043362938b9824"
    );
    assert_eq!(sums.sha1, sha1_bytes(b"hello"));
    assert_eq!(sums.md5, md5_bytes(b"hello"));
}
