//! Decoder/Renderer
//!
//! Decodes raw PMS bodies into their typed shape and re-encodes them as
//! JSON indented with four spaces.

use super::fetcher::FetchResult;
use super::kind::ResourceKind;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::ser::PrettyFormatter;

const INDENT: &[u8] = b"    ";

/// Serialize `value` as JSON with a four-space indent
pub fn to_pretty_json<T: Serialize + ?Sized>(value: &T) -> Result<String, serde_json::Error> {
    let mut buf = Vec::new();
    let mut ser =
        serde_json::Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(INDENT));
    value.serialize(&mut ser)?;
    String::from_utf8(buf).map_err(serde::ser::Error::custom)
}

/// Decode one `T` from `raw` and pretty-print it
pub fn reformat<T: DeserializeOwned + Serialize>(raw: &[u8]) -> Result<String, serde_json::Error> {
    let value: T = serde_json::from_slice(raw)?;
    to_pretty_json(&value)
}

/// Decode an array of `T` from `raw` and pretty-print it as one block
pub fn reformat_collection<T: DeserializeOwned + Serialize>(
    raw: &[u8],
) -> Result<String, serde_json::Error> {
    let values: Vec<T> = serde_json::from_slice(raw)?;
    to_pretty_json(&values)
}

/// Render a fetch result.
///
/// A body that does not decode renders as nothing; the rest of the batch is
/// unaffected.
pub fn render(kind: ResourceKind, result: &FetchResult) -> String {
    match result {
        FetchResult::Collection(raw) => match kind.render_collection(raw) {
            Ok(block) => block,
            Err(e) => {
                tracing::debug!("dropping undecodable {} collection: {}", kind, e);
                String::new()
            }
        },
        FetchResult::Items(items) => {
            let mut output = String::new();
            for (name, raw) in items {
                match kind.render_item(raw) {
                    Ok(block) => {
                        output.push_str(&block);
                        output.push('\n');
                    }
                    Err(e) => {
                        tracing::debug!("dropping undecodable {} '{}': {}", kind, name, e);
                    }
                }
            }
            output
        }
    }
}
