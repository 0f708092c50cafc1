use super::SchemaElement;
use crate::core::Result;

/// Parse an `.xcdatamodel/contents` style XML document.
pub fn parse_xml(source: &str) -> Result<SchemaElement> {
    let document = roxmltree::Document::parse(source)?;
    Ok(convert(document.root_element()))
}

fn convert(node: roxmltree::Node<'_, '_>) -> SchemaElement {
    let mut element = SchemaElement::new(node.tag_name().name());
    for attribute in node.attributes() {
        element
            .attributes
            .insert(attribute.name().to_string(), attribute.value().to_string());
    }
    element.children = node
        .children()
        .filter(|child| child.is_element())
        .map(convert)
        .collect();
    element
}
