// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use std::str::FromStr;

use alloy::{
    dyn_abi::{DynSolValue, Specifier},
    json_abi::Constructor,
    primitives::{Address, Bytes},
};

use super::DeploymentError::{self, InvalidAddress, InvalidConstructor};
use crate::core::ledger::EntityId;

/// Ordered constructor arguments, ABI-encoded when the contract is created.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct ConstructorParameters(Vec<DynSolValue>);

impl ConstructorParameters {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_address(mut self, address: Address) -> Self {
        self.push(DynSolValue::Address(address));
        self
    }

    pub fn push(&mut self, value: DynSolValue) {
        self.0.push(value);
    }

    pub fn values(&self) -> &[DynSolValue] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Parses address arguments given either as ledger ids (`0.0.1234`) or EVM addresses.
    pub fn parse_addresses<S: AsRef<str>>(args: &[S]) -> Result<Self, DeploymentError> {
        let mut params = Self::new();
        for arg in args {
            params.push(DynSolValue::Address(parse_address(arg.as_ref())?));
        }
        Ok(params)
    }

    /// Parses string arguments into the types declared by `constructor`.
    pub fn coerce<S: AsRef<str>>(
        args: &[S],
        constructor: &Constructor,
    ) -> Result<Self, DeploymentError> {
        if args.len() != constructor.inputs.len() {
            return Err(arity_mismatch(constructor, args.len()));
        }
        let mut params = Self::new();
        for (arg, param) in args.iter().zip(constructor.inputs.iter()) {
            let arg = arg.as_ref();
            let ty = param.resolve().map_err(|err| {
                InvalidConstructor(format!("could not resolve constructor arg {param}: {err}"))
            })?;
            // ledger ids are accepted wherever an address is expected
            let value = match ty.coerce_str(arg) {
                Ok(value) => value,
                Err(_) if param.ty == "address" => DynSolValue::Address(parse_address(arg)?),
                Err(err) => {
                    return Err(InvalidConstructor(format!(
                        "could not parse constructor arg {param}: {err}"
                    )));
                }
            };
            params.push(value);
        }
        Ok(params)
    }

    /// Checks arity and types against the artifact's constructor, when it declares one.
    pub fn check(&self, constructor: Option<&Constructor>) -> Result<(), DeploymentError> {
        let Some(constructor) = constructor else {
            if !self.is_empty() {
                warn!(@yellow, "contract ABI declares no constructor, passing {} arguments unchecked", self.len());
            }
            return Ok(());
        };
        if self.len() != constructor.inputs.len() {
            return Err(arity_mismatch(constructor, self.len()));
        }
        for (index, (value, param)) in self.0.iter().zip(constructor.inputs.iter()).enumerate() {
            let ty = param.resolve().map_err(|err| {
                InvalidConstructor(format!("could not resolve constructor arg {param}: {err}"))
            })?;
            if !ty.matches(value) {
                return Err(InvalidConstructor(format!(
                    "argument {index} does not match constructor input {param}"
                )));
            }
        }
        Ok(())
    }

    /// ABI encoding of the arguments, without a selector.
    pub fn encode(&self) -> Bytes {
        if self.is_empty() {
            return Bytes::new();
        }
        DynSolValue::Tuple(self.0.clone()).abi_encode_params().into()
    }
}

fn arity_mismatch(constructor: &Constructor, got: usize) -> DeploymentError {
    InvalidConstructor(format!(
        "mismatch number of constructor arguments (want {:?} ({}); got {})",
        constructor.inputs,
        constructor.inputs.len(),
        got,
    ))
}

/// Parses a `shard.realm.num` id or a hex EVM address.
pub fn parse_address(text: &str) -> Result<Address, DeploymentError> {
    let text = text.trim();
    if let Ok(id) = EntityId::from_str(text) {
        return Ok(id.to_evm_address());
    }
    Address::from_str(text).map_err(|_| InvalidAddress(text.to_owned()))
}
