//! Trading partner extraction.
//!
//! Partners appear in two document shapes. Configuration exports embed them
//! with every field as child text; partner directories put the identifier
//! and name in attributes and only the contact in a child element.

use roxmltree::Node;

use crate::config::PARTNER_TAG;
use crate::types::Partner;
use crate::xml::XmlQuery;

/// Extract partners embedded in a configuration export.
///
/// Reads `ID`, `Name` and `Contact` child text.
pub fn extract_embedded_partners(root: Node<'_, '_>) -> Vec<Partner> {
    root.elements_named(PARTNER_TAG)
        .into_iter()
        .map(|partner| Partner {
            id: partner.text_of("ID"),
            name: partner.text_of("Name"),
            contact: partner.text_of("Contact"),
        })
        .collect()
}

/// Extract partners from a standalone partner directory.
///
/// Reads `id` and `name` attributes and `Contact` child text.
pub fn extract_directory_partners(root: Node<'_, '_>) -> Vec<Partner> {
    root.elements_named(PARTNER_TAG)
        .into_iter()
        .map(|partner| Partner {
            id: partner.attr("id"),
            name: partner.attr("name"),
            contact: partner.text_of("Contact"),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use roxmltree::Document;

    const EMBEDDED: &str = r#"<Export>
        <Partner><ID>P1</ID><Name>Acme</Name><Contact>edi@acme.example</Contact></Partner>
        <Partner><ID>P2</ID></Partner>
    </Export>"#;

    const DIRECTORY: &str = r#"<PartnerDirectory>
        <Partner id="P1" name="Acme"><Contact>edi@acme.example</Contact></Partner>
        <Partner id="P2"><ID>ignored</ID></Partner>
    </PartnerDirectory>"#;

    #[test]
    fn test_embedded_reads_child_text() {
        let doc = Document::parse(EMBEDDED).unwrap();
        let partners = extract_embedded_partners(doc.root());

        assert_eq!(
            partners,
            vec![
                Partner {
                    id: "P1".to_string(),
                    name: "Acme".to_string(),
                    contact: "edi@acme.example".to_string(),
                },
                Partner {
                    id: "P2".to_string(),
                    name: String::new(),
                    contact: String::new(),
                },
            ]
        );
    }

    #[test]
    fn test_directory_reads_attributes() {
        let doc = Document::parse(DIRECTORY).unwrap();
        let partners = extract_directory_partners(doc.root());

        assert_eq!(partners.len(), 2);
        assert_eq!(partners[0].id, "P1");
        assert_eq!(partners[0].name, "Acme");
        assert_eq!(partners[0].contact, "edi@acme.example");
        assert_eq!(partners[1].id, "P2");
        assert_eq!(partners[1].name, "");
    }

    #[test]
    fn test_shapes_are_not_interchangeable() {
        let doc = Document::parse(DIRECTORY).unwrap();
        let partners = extract_embedded_partners(doc.root());

        // Directory attributes are invisible to the embedded reader.
        assert_eq!(partners[0].id, "");
        assert_eq!(partners[1].id, "ignored");
    }
}
