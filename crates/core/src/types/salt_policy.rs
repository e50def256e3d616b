use alloy::primitives::{B256, keccak256};
use uuid::Uuid;

use super::privileged_call::SENTINEL;

/// How the salt of a privileged call is chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SaltPolicy {
    #[default]
    Zero,
    Fixed(B256),
    Random,
}

impl SaltPolicy {
    pub fn resolve(&self) -> B256 {
        match self {
            SaltPolicy::Zero => SENTINEL,
            SaltPolicy::Fixed(salt) => *salt,
            SaltPolicy::Random => keccak256(Uuid::new_v4().as_bytes()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy::primitives::b256;

    #[test]
    fn test_resolve() {
        let fixed = b256!("0x85a1d638adb1d66ab2fd111cc71199c952980658e19ee82b06d76cf42b341b74");

        assert_eq!(SaltPolicy::default().resolve(), B256::ZERO);
        assert_eq!(SaltPolicy::Fixed(fixed).resolve(), fixed);
        assert_ne!(SaltPolicy::Random.resolve(), SaltPolicy::Random.resolve());
        assert_ne!(SaltPolicy::Random.resolve(), B256::ZERO);
    }
}
