//! Indented XML serialization of element trees.

use std::io::Write;

use quick_xml::Writer;
use quick_xml::escape::partial_escape;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};

use crate::error::Result;

use super::tree::{Element, Node};

/// Serializer settings.
#[derive(Debug, Clone, Copy)]
pub struct XmlFormat {
    /// Spaces per nesting level. Zero disables indentation.
    pub indent: usize,
}

impl Default for XmlFormat {
    fn default() -> Self {
        Self { indent: 2 }
    }
}

/// Write `root` as a complete document with an XML declaration.
///
/// Elements without children are self-closing; elements whose content is
/// text stay on one line.
pub fn write_document<W: Write>(root: &Element, out: W, format: XmlFormat) -> Result<()> {
    let mut writer = if format.indent > 0 {
        Writer::new_with_indent(out, b' ', format.indent)
    } else {
        Writer::new(out)
    };

    writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;
    write_element(&mut writer, root)?;
    writer.get_mut().write_all(b"\n")?;
    Ok(())
}

/// Serialize `root` to a string with the default two-space indent.
pub fn to_xml_string(root: &Element) -> Result<String> {
    let mut buf = Vec::new();
    write_document(root, &mut buf, XmlFormat::default())?;
    Ok(String::from_utf8(buf)?)
}

fn write_element<W: Write>(writer: &mut Writer<W>, element: &Element) -> Result<()> {
    let mut start = BytesStart::new(element.name.as_str());
    for (key, value) in &element.attributes {
        start.push_attribute((key.as_str(), value.as_str()));
    }

    if element.children.is_empty() {
        writer.write_event(Event::Empty(start))?;
        return Ok(());
    }

    writer.write_event(Event::Start(start))?;
    for child in &element.children {
        match child {
            Node::Element(e) => write_element(writer, e)?,
            Node::Text(t) => {
                writer.write_event(Event::Text(BytesText::from_escaped(partial_escape(t))))?
            }
        }
    }
    writer.write_event(Event::End(BytesEnd::new(element.name.as_str())))?;
    Ok(())
}
