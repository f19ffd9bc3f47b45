pub mod constraint;
pub mod transaction;
pub mod validator_factory;

pub use constraint::{CryptoAddressConstraint, CryptoTransactionHashConstraint, Violation};
pub use transaction::{EthereumTransactionValidator, TransactionValidator, TronTransactionValidator};
pub use validator_factory::ValidatorFactory;
