//! Output shapes pasted into a deployment tool.

// crates.io
use serde::Deserialize;
// cig
use crate::input::Transfer;

/// How a CSV input is rendered.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(tag = "template", rename_all = "snake_case")]
pub enum Template {
	/// `"<token_address>","<beneficiary>"` per address of the first row.
	PairWithConstant { token_address: String },
	/// `"<to_address>",<value>` per row.
	PairFromRow,
	/// `["addr_1",...,"addr_n"]` over the first row.
	ArrayLiteral,
}
impl Template {
	/// Prefix of the default output file name.
	pub fn kind(&self) -> &'static str {
		match self {
			Self::PairWithConstant { .. } => "timelock-constructor-input",
			Self::PairFromRow => "transfer-input",
			Self::ArrayLiteral => "whitelist-array",
		}
	}
}

pub fn pair_with_constant(token_address: &str, beneficiaries: &[String]) -> String {
	beneficiaries.iter().map(|b| format!("\"{token_address}\",\"{b}\"\n")).collect()
}

pub fn pair_from_row(transfers: &[Transfer]) -> String {
	transfers.iter().map(|t| format!("\"{}\",{}\n", t.to, t.value)).collect()
}

/// Zero addresses render as `[]`.
pub fn array_literal(addresses: &[String]) -> String {
	let quoted = addresses.iter().map(|a| format!("\"{a}\"")).collect::<Vec<_>>();

	format!("[{}]", quoted.join(","))
}
