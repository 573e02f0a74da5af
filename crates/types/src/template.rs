//! The private-chain call template.
//!
//! The target call is fixed for the lifetime of the process: a function
//! signature plus a JSON argument list, both supplied through the
//! environment. Parsing and ABI-encoding happen once at startup, so a
//! malformed template is a fatal configuration error and the per-slot build
//! path only ever signs pre-validated calldata.

use alloy::{
    dyn_abi::{DynSolType, DynSolValue},
    primitives::{keccak256, Bytes},
};

/// Errors raised while parsing the call signature or argument list.
#[derive(Debug, thiserror::Error)]
pub enum TemplateError {
    /// The signature is missing its parameter list.
    #[error("malformed call signature: {0}")]
    Signature(String),
    /// The argument list failed to parse as JSON.
    #[error("failed to parse call arguments: {0}")]
    Json(#[from] serde_json::Error),
    /// The argument list is not a JSON array.
    #[error("call arguments must be a JSON array")]
    ArgsNotArray,
    /// The argument list does not match the signature's parameter count.
    #[error("call signature takes {expected} arguments, got {got}")]
    ArityMismatch {
        /// Parameters declared by the signature.
        expected: usize,
        /// Arguments supplied.
        got: usize,
    },
    /// A parameter type failed to parse, or an argument failed to coerce.
    #[error(transparent)]
    Abi(#[from] alloy::dyn_abi::Error),
}

/// A pre-parsed, pre-encoded call template.
///
/// The calldata is `keccak(signature)[0..4] ++ abiEncode(args)`, computed
/// once and reused for every bid.
#[derive(Debug, Clone)]
pub struct CallTemplate {
    /// The canonical call signature.
    signature: String,
    /// Selector-prefixed ABI-encoded calldata.
    calldata: Bytes,
}

impl CallTemplate {
    /// Parse a signature such as `transfer(address,uint256)` and a JSON
    /// argument array, and encode the calldata.
    pub fn parse(signature: &str, args_json: &str) -> Result<Self, TemplateError> {
        let signature = signature.trim();
        let open = signature
            .find('(')
            .ok_or_else(|| TemplateError::Signature(signature.to_string()))?;
        let close = signature
            .rfind(')')
            .filter(|close| *close > open)
            .ok_or_else(|| TemplateError::Signature(signature.to_string()))?;

        let params = signature[open + 1..close].trim();
        let types = if params.is_empty() {
            Vec::new()
        } else {
            params
                .split(',')
                .map(|ty| DynSolType::parse(ty.trim()))
                .collect::<Result<Vec<_>, _>>()?
        };

        let args: serde_json::Value = serde_json::from_str(args_json)?;
        let serde_json::Value::Array(args) = args else {
            return Err(TemplateError::ArgsNotArray);
        };
        if args.len() != types.len() {
            return Err(TemplateError::ArityMismatch { expected: types.len(), got: args.len() });
        }

        let values = types
            .iter()
            .zip(&args)
            .map(|(ty, arg)| coerce(ty, arg))
            .collect::<Result<Vec<_>, _>>()?;

        let mut calldata = keccak256(signature.as_bytes())[..4].to_vec();
        calldata.extend(DynSolValue::Tuple(values).abi_encode_params());

        Ok(Self { signature: signature.to_string(), calldata: calldata.into() })
    }

    /// The canonical call signature.
    pub fn signature(&self) -> &str {
        &self.signature
    }

    /// Selector-prefixed calldata.
    pub const fn calldata(&self) -> &Bytes {
        &self.calldata
    }

    /// The 4-byte function selector.
    pub fn selector(&self) -> [u8; 4] {
        self.calldata[..4].try_into().expect("calldata starts with the selector")
    }
}

/// Coerce one JSON argument into the parameter's Solidity type. Strings are
/// coerced directly; other JSON scalars go through their canonical text
/// form, which matches the decimal/hex forms `coerce_str` accepts.
fn coerce(ty: &DynSolType, arg: &serde_json::Value) -> Result<DynSolValue, TemplateError> {
    let text = match arg {
        serde_json::Value::String(s) => s.clone(),
        other => other.to_string(),
    };
    ty.coerce_str(&text).map_err(Into::into)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn erc20_transfer_selector_and_layout() {
        let template = CallTemplate::parse(
            "transfer(address,uint256)",
            r#"["0x000000000000000000000000000000000000dead", "1000"]"#,
        )
        .unwrap();
        assert_eq!(template.selector(), [0xa9, 0x05, 0x9c, 0xbb]);
        // selector + two 32-byte words
        assert_eq!(template.calldata().len(), 4 + 64);
        // the address lands right-aligned in the first word
        assert_eq!(&template.calldata()[4 + 12..4 + 30], &[0u8; 18]);
        assert_eq!(&template.calldata()[4 + 30..4 + 32], &[0xde, 0xad]);
    }

    #[test]
    fn numeric_json_arguments_coerce() {
        let template =
            CallTemplate::parse("mint(uint256)", "[12345]").unwrap();
        assert_eq!(&template.calldata()[4 + 30..], &[0x30, 0x39]);
    }

    #[test]
    fn zero_argument_call_is_selector_only() {
        let template = CallTemplate::parse("ping()", "[]").unwrap();
        assert_eq!(template.calldata().len(), 4);
    }

    #[test]
    fn missing_parens_is_rejected() {
        let err = CallTemplate::parse("transfer", "[]").unwrap_err();
        assert!(matches!(err, TemplateError::Signature(_)));
    }

    #[test]
    fn arity_mismatch_is_rejected() {
        let err = CallTemplate::parse("transfer(address,uint256)", r#"["0x00"]"#).unwrap_err();
        assert!(matches!(err, TemplateError::ArityMismatch { expected: 2, got: 1 }));
    }

    #[test]
    fn non_array_arguments_are_rejected() {
        let err = CallTemplate::parse("ping()", r#"{"a": 1}"#).unwrap_err();
        assert!(matches!(err, TemplateError::ArgsNotArray));
    }

    #[test]
    fn bad_type_is_rejected() {
        assert!(CallTemplate::parse("frob(notatype)", r#"["1"]"#).is_err());
    }
}
