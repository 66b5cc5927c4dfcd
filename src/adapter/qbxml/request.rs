//! qbXML Batch Request Builder
//!
//! StandardTermsAddRq のバッチ文書を組み立てる

use quick_xml::escape::escape;

use crate::domain::entities::payment_term::PaymentTerm;
use crate::domain::error::ImportError;

pub const DEFAULT_QBXML_VERSION: &str = "13.0";

/// Build one qbXML document with a `StandardTermsAddRq` per term, in input order.
///
/// The message set uses `onError="continueOnError"` so a failure on one item
/// does not stop the remaining items. `StdDueDays` keeps the trailing space
/// inside both tags; the QuickBooks parser requires it.
pub fn build_terms_add_request(
    terms: &[PaymentTerm],
    version: &str,
) -> Result<String, ImportError> {
    let mut xml = String::from("<?xml version=\"1.0\" encoding=\"utf-8\"?>\n");
    xml.push_str(&format!("<?qbxml version=\"{}\"?>\n", version));
    xml.push_str("<QBXML>\n");
    xml.push_str("<QBXMLMsgsRq onError=\"continueOnError\">\n");

    for (index, term) in terms.iter().enumerate() {
        xml.push_str(&term_add_fragment(index, term)?);
    }

    xml.push_str("</QBXMLMsgsRq>\n");
    xml.push_str("</QBXML>\n");
    Ok(xml)
}

/// Serialize a single term; the entity itself is left untouched
fn term_add_fragment(index: usize, term: &PaymentTerm) -> Result<String, ImportError> {
    let name = term.name.trim();
    if name.is_empty() {
        return Err(ImportError::InvalidTerm {
            index,
            reason: "name cannot be empty or whitespace".to_string(),
        });
    }

    Ok(format!(
        "<StandardTermsAddRq requestID=\"{}\">\n\
         <StandardTermsAdd>\n\
         <Name>{}</Name>\n\
         <StdDueDays >{}</StdDueDays >\n\
         </StandardTermsAdd>\n\
         </StandardTermsAddRq>\n",
        index + 1,
        escape(name),
        term.discount_days
    ))
}
