//! Configuration export extraction.
//!
//! A configuration export holds interfaces in both dialects alongside
//! embedded partners and certificates, all at document scope.

use roxmltree::Node;

use super::certificate::extract_xml_certificates;
use super::partner::extract_embedded_partners;
use crate::dialect::create_interface_registry;
use crate::types::{Extraction, Interface, Mapping};

/// Extract everything a configuration export carries.
///
/// Interfaces come primary dialect first, then legacy. The mapping list is
/// the flattened, provenance-tagged view of the interfaces' own mappings.
pub fn extract_configuration(root: Node<'_, '_>) -> Extraction {
    let interfaces = create_interface_registry().extract(root);
    let mappings = flatten_mappings(&interfaces);

    Extraction {
        mappings,
        partners: extract_embedded_partners(root),
        certificates: extract_xml_certificates(root),
        interfaces,
        warnings: Vec::new(),
    }
}

/// Flatten interface mappings into one list, each tagged `[ICO] <id>`.
///
/// Interfaces without nested mappings (every legacy-dialect interface)
/// contribute nothing.
pub fn flatten_mappings(interfaces: &[Interface]) -> Vec<Mapping> {
    interfaces
        .iter()
        .flat_map(|interface| {
            interface
                .mappings
                .iter()
                .map(|mapping| Mapping::Field(mapping.tagged(&interface.id)))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::FieldMapping;
    use roxmltree::Document;

    fn primary_item(id: &str, mappings: usize) -> String {
        let nested: String = (0..mappings)
            .map(|m| {
                format!(
                    "<Mapping><Source>S{m}</Source><Target>T{m}</Target><Program>MM_{id}</Program></Mapping>"
                )
            })
            .collect();
        format!(
            r#"<IntegratedConfiguration id="{id}"><Party>A</Party><Party>B</Party>{nested}</IntegratedConfiguration>"#
        )
    }

    #[test]
    fn test_n_items_with_m_mappings() {
        for (n, m) in [(0, 0), (1, 0), (1, 3), (4, 2)] {
            let items: String = (0..n).map(|i| primary_item(&format!("ICO_{i}"), m)).collect();
            let xml = format!("<Export>{items}</Export>");
            let doc = Document::parse(&xml).unwrap();

            let extraction = extract_configuration(doc.root());

            assert_eq!(extraction.interfaces.len(), n);
            assert_eq!(extraction.mappings.len(), n * m);
            for mapping in &extraction.mappings {
                let Mapping::Field(field) = mapping else {
                    panic!("expected field mapping, got {mapping:?}");
                };
                let name = field.name.as_deref().unwrap();
                assert!(name.starts_with("[ICO] ICO_"), "unexpected name {name}");
                assert_eq!(field.program, format!("MM_{}", &name[6..]));
            }
        }
    }

    #[test]
    fn test_mixed_dialects() {
        let xml = format!(
            r#"<Export>
                <ICO name="Legacy_1"><SenderParty name="X"/></ICO>
                {}
                <Group><ICO id="Legacy_2"/></Group>
                {}
            </Export>"#,
            primary_item("Primary_1", 1),
            primary_item("Primary_2", 2)
        );
        let doc = Document::parse(&xml).unwrap();

        let extraction = extract_configuration(doc.root());

        let ids: Vec<_> = extraction.interfaces.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, vec!["Primary_1", "Primary_2", "Legacy_1", "Legacy_2"]);
        assert!(extraction.interfaces[2..].iter().all(|i| i.mappings.is_empty()));
        assert_eq!(extraction.mappings.len(), 3);
    }

    #[test]
    fn test_colliding_ids_are_kept() {
        let xml = format!(
            r#"<Export>{}<ICO id="Same"/></Export>"#,
            primary_item("Same", 0)
        );
        let doc = Document::parse(&xml).unwrap();

        let extraction = extract_configuration(doc.root());
        assert_eq!(extraction.interfaces.len(), 2);
    }

    #[test]
    fn test_embedded_partners_and_certificates() {
        let xml = r#"<Export>
            <Partner><ID>P1</ID><Name>Acme</Name></Partner>
            <Certificate><Alias>ssl</Alias></Certificate>
        </Export>"#;
        let doc = Document::parse(xml).unwrap();

        let extraction = extract_configuration(doc.root());

        assert!(extraction.interfaces.is_empty());
        assert_eq!(extraction.partners[0].name, "Acme");
        assert_eq!(extraction.certificates[0].alias, "ssl");
    }

    #[test]
    fn test_flatten_keeps_interface_mappings_untagged() {
        let interface = Interface {
            id: "ICO_1".to_string(),
            mappings: vec![FieldMapping {
                source: "a".to_string(),
                target: "b".to_string(),
                program: "p".to_string(),
                name: None,
            }],
            ..Interface::default()
        };

        let flattened = flatten_mappings(std::slice::from_ref(&interface));

        assert_eq!(flattened[0].name(), Some("[ICO] ICO_1"));
        assert_eq!(interface.mappings[0].name, None);
    }
}
