use sha2::{Digest, Sha256};

/// Lowercase hex of the SHA-256 digest of `data`, cut to `length` characters
pub fn sha256_hex(data: &[u8], length: usize) -> String {
    let digest = Sha256::digest(data);
    let mut hex = String::with_capacity(digest.len() * 2);
    for byte in digest.iter() {
        hex.push_str(&format!("{:02x}", byte));
    }
    hex.truncate(length);
    hex
}
