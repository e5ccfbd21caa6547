use md5::{Digest, Md5};

pub const MD5_DIGEST_LENGTH: usize = 16;

pub fn get_md5_digest(data: &[u8]) -> [u8; MD5_DIGEST_LENGTH] {
    Md5::digest(data).into()
}
