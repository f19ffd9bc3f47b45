use once_cell::sync::Lazy;
use regex::Regex;
use sha3::{Digest, Keccak256};

use super::CryptoAddress;

static ADDRESS_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(0x)?[0-9a-fA-F]{40}$").expect("valid address pattern"));
static LOWERCASE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(0x)?[0-9a-f]{40}$").expect("valid lowercase pattern"));
static UPPERCASE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(0x)?[0-9A-F]{40}$").expect("valid uppercase pattern"));

/// Ethereum 地址校验（EIP-55）
///
/// - `0x` 前缀可选
/// - 全小写或全大写地址不要求 checksum
/// - 大小写混合时按 EIP-55 校验
///
/// https://eips.ethereum.org/EIPS/eip-55
#[derive(Debug, Clone, Copy, Default)]
pub struct EthereumAddress;

impl EthereumAddress {
    /// 生成 EIP-55 大小写形式（带 `0x` 前缀）
    ///
    /// 输入必须是 40 位十六进制（`0x` 前缀可选），否则返回 `None`。
    pub fn to_checksum_address(address: &str) -> Option<String> {
        if !ADDRESS_PATTERN.is_match(address) {
            return None;
        }

        let body = strip_prefix(address).to_ascii_lowercase();
        let hash = keccak_nibbles(&body);

        let mut out = String::with_capacity(42);
        out.push_str("0x");
        for (ch, nibble) in body.chars().zip(hash) {
            if ch.is_ascii_alphabetic() && nibble >= 8 {
                out.push(ch.to_ascii_uppercase());
            } else {
                out.push(ch);
            }
        }
        Some(out)
    }

    fn matches_pattern(address: &str) -> bool {
        ADDRESS_PATTERN.is_match(address)
    }

    fn is_all_same_caps(address: &str) -> bool {
        LOWERCASE_PATTERN.is_match(address) || UPPERCASE_PATTERN.is_match(address)
    }

    /// EIP-55 checksum 校验
    ///
    /// 第 i 个字母必须在 Keccak-256(小写地址) 第 i 个十六进制位 > 7 时大写，否则小写。
    fn is_valid_checksum(address: &str) -> bool {
        let body = strip_prefix(address);
        let hash = keccak_nibbles(&body.to_ascii_lowercase());

        body.chars().zip(hash).all(|(ch, nibble)| {
            if !ch.is_ascii_alphabetic() {
                return true;
            }
            ch.is_ascii_uppercase() == (nibble > 7)
        })
    }
}

impl CryptoAddress for EthereumAddress {
    fn is_valid(&self, address: &str) -> bool {
        if !Self::matches_pattern(address) {
            return false;
        }
        Self::is_all_same_caps(address) || Self::is_valid_checksum(address)
    }
}

fn strip_prefix(address: &str) -> &str {
    address.strip_prefix("0x").unwrap_or(address)
}

/// Keccak-256 摘要按十六进制位展开（64 个 nibble，高位在前）
fn keccak_nibbles(lowercase_body: &str) -> impl Iterator<Item = u8> {
    let digest = Keccak256::digest(lowercase_body.as_bytes());
    digest
        .into_iter()
        .flat_map(|byte| [byte >> 4, byte & 0x0f])
}
