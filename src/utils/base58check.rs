//! Base58Check 编解码辅助（Bitcoin 字母表，4 字节 double-SHA256 校验和）

use sha2::{Digest, Sha256};

/// 校验和长度（字节）
pub const CHECKSUM_LEN: usize = 4;

/// Base58 解码，返回完整字节（payload + checksum）
///
/// 不剥离版本字节或校验和，由调用方按各自网络的规则复核。
/// 含非法字符时返回 `None`。
pub fn decode(input: &str) -> Option<Vec<u8>> {
    bs58::decode(input).into_vec().ok()
}

/// 计算 `SHA256(SHA256(payload))[0..4]`
pub fn checksum(payload: &[u8]) -> [u8; CHECKSUM_LEN] {
    let first = Sha256::digest(payload);
    let second = Sha256::digest(first);

    let mut out = [0u8; CHECKSUM_LEN];
    out.copy_from_slice(&second[..CHECKSUM_LEN]);
    out
}

/// 拆分 payload 与尾部校验和并比对
pub fn verify(decoded: &[u8]) -> bool {
    if decoded.len() <= CHECKSUM_LEN {
        return false;
    }
    let (payload, embedded) = decoded.split_at(decoded.len() - CHECKSUM_LEN);
    checksum(payload) == embedded
}

/// Base58Check 编码（payload 后追加校验和）
pub fn encode(payload: &[u8]) -> String {
    let mut bytes = payload.to_vec();
    bytes.extend_from_slice(&checksum(payload));
    bs58::encode(bytes).into_string()
}
