use super::error::ProcessorError;
use super::fee::FeeSummary;
use super::types::{ClassifiedTransaction, TxDetail, TxKind, TypeCode};

#[derive(Debug, Default)]
pub struct ClassifiedTransactionBuilder {
    hash: Option<String>,
    kind: Option<TxKind>,
    type_code: Option<TypeCode>,
    from: String,
    to: String,
    display_value: String,
    original_value: String,
    block_height: u64,
    memo: String,
    detail: TxDetail,
    chain_id: String,
    fee: Option<FeeSummary>,
    domain_name: Option<String>,
}

impl ClassifiedTransactionBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn hash(mut self, hash: impl Into<String>) -> Self {
        self.hash = Some(hash.into());
        self
    }

    pub fn kind(mut self, kind: TxKind) -> Self {
        self.kind = Some(kind);
        self
    }

    pub fn type_code(mut self, type_code: TypeCode) -> Self {
        self.type_code = Some(type_code);
        self
    }

    pub fn parties(mut self, from: impl Into<String>, to: impl Into<String>) -> Self {
        self.from = from.into();
        self.to = to.into();
        self
    }

    /// Set the unsigned value and the value as displayed to the queried account.
    pub fn values(mut self, original_value: impl Into<String>, display_value: impl Into<String>) -> Self {
        self.original_value = original_value.into();
        self.display_value = display_value.into();
        self
    }

    pub fn block_height(mut self, height: u64) -> Self {
        self.block_height = height;
        self
    }

    pub fn memo(mut self, memo: impl Into<String>) -> Self {
        self.memo = memo.into();
        self
    }

    pub fn detail(mut self, detail: TxDetail) -> Self {
        self.detail = detail;
        self
    }

    pub fn chain_id(mut self, chain_id: impl Into<String>) -> Self {
        self.chain_id = chain_id.into();
        self
    }

    pub fn fee(mut self, fee: FeeSummary) -> Self {
        self.fee = Some(fee);
        self
    }

    pub fn domain_name(mut self, name: Option<String>) -> Self {
        self.domain_name = name;
        self
    }

    pub fn build(self) -> Result<ClassifiedTransaction, ProcessorError> {
        let hash = self
            .hash
            .ok_or_else(|| ProcessorError::ParseError("hash is required".to_string()))?;
        let kind = self
            .kind
            .ok_or_else(|| ProcessorError::ParseError("kind is required".to_string()))?;
        let fee = self
            .fee
            .ok_or_else(|| ProcessorError::ParseError("fee is required".to_string()))?;

        Ok(ClassifiedTransaction {
            hash,
            type_code: self.type_code.unwrap_or(TypeCode::Unknown),
            kind,
            from: self.from,
            to: self.to,
            display_value: self.display_value,
            original_value: self.original_value,
            block_height: self.block_height,
            memo: self.memo,
            detail: self.detail,
            chain_id: self.chain_id,
            gas_price: fee.gas_price,
            gas_used: fee.gas_used,
            total_fee: fee.total_fee,
            domain_name: self.domain_name,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn zero_fee() -> FeeSummary {
        FeeSummary {
            gas_price: "0 OLT".to_string(),
            gas_used: 0,
            total_fee: "0 OLT".to_string(),
        }
    }

    #[test]
    fn test_build_requires_hash() {
        let result = ClassifiedTransactionBuilder::new()
            .kind(TxKind::Send)
            .fee(zero_fee())
            .build();
        assert!(matches!(result, Err(ProcessorError::ParseError(_))));
    }

    #[test]
    fn test_build_defaults_type_code_to_unknown() {
        let tx = ClassifiedTransactionBuilder::new()
            .hash("0x01")
            .kind(TxKind::Stake)
            .fee(zero_fee())
            .build()
            .unwrap();
        assert_eq!(tx.type_code, TypeCode::Unknown);
        assert_eq!(tx.total_fee, "0 OLT");
        assert!(tx.domain_name.is_none());
    }
}
