//! qbXML Response Parser
//!
//! StandardTermsAddRs の項目ごとの結果を取り出す

use roxmltree::{Document, Node};

use crate::domain::entities::batch_response::{BatchResponse, ItemResult};
use crate::domain::error::ImportError;

const ADD_RESPONSE_TAG: &str = "StandardTermsAddRs";
const NAME_TAG: &str = "Name";

/// Parse every `StandardTermsAddRs` element in document order.
///
/// The element may appear at any depth. A document that is not well-formed
/// XML is an error; a well-formed document with no results is not.
pub fn parse_terms_add_response(xml: &str) -> Result<BatchResponse, ImportError> {
    let doc = Document::parse(xml.trim_start()).map_err(|e| ImportError::ResponseUnparseable {
        cause: e.to_string(),
    })?;

    let items = doc
        .descendants()
        .filter(|n| n.has_tag_name(ADD_RESPONSE_TAG))
        .map(item_from_node)
        .collect();

    Ok(BatchResponse::new(items))
}

fn item_from_node(node: Node) -> ItemResult {
    let name = node
        .descendants()
        .find(|n| n.has_tag_name(NAME_TAG))
        .and_then(|n| n.text())
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string);

    ItemResult {
        request_id: node.attribute("requestID").map(str::to_string),
        status_code: node.attribute("statusCode").unwrap_or_default().to_string(),
        status_severity: node.attribute("statusSeverity").map(str::to_string),
        status_message: node.attribute("statusMessage").map(str::to_string),
        name,
    }
}
