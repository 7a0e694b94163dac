use serde::{Deserialize, Serialize};
use web3::{
    ethabi::{self, ParamType, Token},
    signing::keccak256,
    types::{Address, U256},
};

#[derive(Serialize, Deserialize, Debug, PartialEq, Eq, Hash, Clone, Copy)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AbiKind {
    Address,
    Uint256,
    Bool,
    String,
    Bytes,
}

impl AbiKind {
    pub fn canonical(self) -> &'static str {
        match self {
            Self::Address => "address",
            Self::Uint256 => "uint256",
            Self::Bool => "bool",
            Self::String => "string",
            Self::Bytes => "bytes",
        }
    }

    fn param_type(self) -> ParamType {
        match self {
            Self::Address => ParamType::Address,
            Self::Uint256 => ParamType::Uint(256),
            Self::Bool => ParamType::Bool,
            Self::String => ParamType::String,
            Self::Bytes => ParamType::Bytes,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, PartialEq, Eq, Hash, Clone)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AbiValue {
    Address(Address),
    Uint(U256),
    Bool(bool),
    String(String),
    Bytes(Vec<u8>),
}

impl AbiValue {
    pub fn kind(&self) -> AbiKind {
        match self {
            Self::Address(_) => AbiKind::Address,
            Self::Uint(_) => AbiKind::Uint256,
            Self::Bool(_) => AbiKind::Bool,
            Self::String(_) => AbiKind::String,
            Self::Bytes(_) => AbiKind::Bytes,
        }
    }

    fn into_token(self) -> Token {
        match self {
            Self::Address(address) => Token::Address(address),
            Self::Uint(uint) => Token::Uint(uint),
            Self::Bool(b) => Token::Bool(b),
            Self::String(s) => Token::String(s),
            Self::Bytes(bytes) => Token::Bytes(bytes),
        }
    }

    fn from_token(token: Token) -> Option<Self> {
        match token {
            Token::Address(address) => Some(Self::Address(address)),
            Token::Uint(uint) => Some(Self::Uint(uint)),
            Token::Bool(b) => Some(Self::Bool(b)),
            Token::String(s) => Some(Self::String(s)),
            Token::Bytes(bytes) => Some(Self::Bytes(bytes)),
            _ => None,
        }
    }
}

/// First four bytes of the keccak hash of the canonical function signature.
pub fn selector(function: &str, args: &[AbiValue]) -> [u8; 4] {
    let types = args
        .iter()
        .map(|arg| arg.kind().canonical())
        .collect::<Vec<_>>()
        .join(",");
    let digest = keccak256(format!("{function}({types})").as_bytes());

    let mut out = [0u8; 4];
    out.copy_from_slice(&digest[..4]);
    out
}

pub fn encode_call(function: &str, args: &[AbiValue]) -> Vec<u8> {
    let tokens = args
        .iter()
        .cloned()
        .map(AbiValue::into_token)
        .collect::<Vec<_>>();

    let mut data = selector(function, args).to_vec();
    data.extend(ethabi::encode(&tokens));
    data
}

pub fn decode_returns(returns: &[AbiKind], raw: &[u8]) -> Result<Vec<AbiValue>, String> {
    let kinds = returns
        .iter()
        .map(|kind| kind.param_type())
        .collect::<Vec<_>>();
    let tokens = ethabi::decode(&kinds, raw).map_err(|e| e.to_string())?;

    tokens
        .into_iter()
        .map(|token| AbiValue::from_token(token).ok_or_else(|| "unsupported return type".to_string()))
        .collect()
}
