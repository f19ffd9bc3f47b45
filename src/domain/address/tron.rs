use super::CryptoAddress;
use crate::utils::base58check;

/// 解码后的地址长度：1 字节前缀 + 20 字节地址 + 4 字节校验和
const DECODED_SIZE: usize = 25;

/// Tron 地址校验（Base58Check，前缀 0x41）
#[derive(Debug, Clone, Copy, Default)]
pub struct TronAddress;

impl TronAddress {
    /// Base58 形式的地址长度
    pub const ADDRESS_SIZE: usize = 34;
    /// 十六进制形式的地址前缀
    pub const ADDRESS_PREFIX: &'static str = "41";
    pub const ADDRESS_PREFIX_BYTE: u8 = 0x41;

    /// 校验已解码的字节串：长度、前缀、double-SHA256 校验和
    fn is_valid_decoded(decoded: &[u8]) -> bool {
        if decoded.len() != DECODED_SIZE {
            return false;
        }
        if decoded[0] != Self::ADDRESS_PREFIX_BYTE {
            return false;
        }

        base58check::verify(decoded)
    }
}

impl CryptoAddress for TronAddress {
    fn is_valid(&self, address: &str) -> bool {
        if address.len() != Self::ADDRESS_SIZE {
            return false;
        }

        match base58check::decode(address) {
            Some(decoded) => Self::is_valid_decoded(&decoded),
            None => false,
        }
    }
}
