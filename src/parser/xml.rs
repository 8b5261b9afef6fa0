//! Minimal element tree over `quick-xml` events.
//!
//! Package parts are small enough to hold in memory, and the mapping code
//! reads far more naturally against a tree than against a raw event stream.

use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;

use crate::error::{Error, Result};

/// A node inside an element.
#[derive(Debug, Clone, PartialEq)]
pub enum XmlNode {
    /// Child element
    Element(XmlElement),
    /// Unescaped character data
    Text(String),
}

/// An XML element with its attributes and children.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct XmlElement {
    /// Qualified name as written (e.g. `w:p`)
    pub name: String,
    /// Attributes keyed by local name (e.g. `val` for `w:val`)
    pub attrs: Vec<(String, String)>,
    /// Child nodes in document order
    pub children: Vec<XmlNode>,
}

impl XmlElement {
    /// Name without namespace prefix.
    pub fn local_name(&self) -> &str {
        local(&self.name)
    }

    /// Look up an attribute by local name.
    pub fn attr(&self, key: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Child elements in order.
    pub fn elements(&self) -> impl Iterator<Item = &XmlElement> {
        self.children.iter().filter_map(|node| match node {
            XmlNode::Element(e) => Some(e),
            XmlNode::Text(_) => None,
        })
    }

    /// Child elements with the given local name.
    pub fn children_named<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a XmlElement> {
        self.elements().filter(move |e| e.local_name() == name)
    }

    /// First child element with the given local name.
    pub fn child(&self, name: &str) -> Option<&XmlElement> {
        self.elements().find(|e| e.local_name() == name)
    }

    /// Concatenated text of this element and its descendants.
    pub fn text(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        for node in &self.children {
            match node {
                XmlNode::Text(t) => out.push_str(t),
                XmlNode::Element(e) => e.collect_text(out),
            }
        }
    }

    fn from_start(start: &BytesStart<'_>) -> Result<Self> {
        let mut attrs = Vec::new();
        for attr in start.attributes() {
            let attr = attr.map_err(|e| Error::Xml(e.to_string()))?;
            let key = String::from_utf8_lossy(attr.key.local_name().as_ref()).into_owned();
            let value = attr.unescape_value()?.into_owned();
            attrs.push((key, value));
        }

        Ok(Self {
            name: String::from_utf8_lossy(start.name().as_ref()).into_owned(),
            attrs,
            children: Vec::new(),
        })
    }
}

fn local(name: &str) -> &str {
    name.rsplit_once(':').map(|(_, l)| l).unwrap_or(name)
}

/// Parse a part into its root element.
pub fn parse_element_tree(part: &str, data: &[u8]) -> Result<XmlElement> {
    let mut reader = Reader::from_reader(data);
    reader.config_mut().trim_text(false);

    let mut stack: Vec<XmlElement> = Vec::new();
    let mut root: Option<XmlElement> = None;
    let mut buf = Vec::new();

    loop {
        buf.clear();
        match reader.read_event_into(&mut buf)? {
            Event::Start(e) => stack.push(XmlElement::from_start(&e)?),
            Event::Empty(e) => {
                let element = XmlElement::from_start(&e)?;
                attach(&mut stack, &mut root, element);
            }
            Event::End(_) => {
                let element = stack.pop().ok_or_else(|| Error::InvalidPart {
                    part: part.to_string(),
                    reason: "unbalanced end tag".to_string(),
                })?;
                attach(&mut stack, &mut root, element);
            }
            Event::Text(t) => {
                if let Some(parent) = stack.last_mut() {
                    parent.children.push(XmlNode::Text(t.unescape()?.into_owned()));
                }
            }
            Event::CData(t) => {
                if let Some(parent) = stack.last_mut() {
                    let text = String::from_utf8_lossy(&t.into_inner()).into_owned();
                    parent.children.push(XmlNode::Text(text));
                }
            }
            Event::Eof => break,
            _ => {}
        }
    }

    if !stack.is_empty() {
        return Err(Error::InvalidPart {
            part: part.to_string(),
            reason: "unexpected end of document".to_string(),
        });
    }

    root.ok_or_else(|| Error::InvalidPart {
        part: part.to_string(),
        reason: "no root element".to_string(),
    })
}

fn attach(stack: &mut [XmlElement], root: &mut Option<XmlElement>, element: XmlElement) {
    match stack.last_mut() {
        Some(parent) => parent.children.push(XmlNode::Element(element)),
        None => {
            if root.is_none() {
                *root = Some(element);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_tree() {
        let xml = br#"<?xml version="1.0" encoding="UTF-8"?>
<w:document xmlns:w="urn:w"><w:body><w:p><w:pPr><w:pStyle w:val="Heading1"/></w:pPr><w:r><w:t xml:space="preserve"> a &amp; b </w:t></w:r></w:p></w:body></w:document>"#;
        let root = parse_element_tree("word/document.xml", xml).unwrap();

        assert_eq!(root.name, "w:document");
        assert_eq!(root.local_name(), "document");
        let body = root.child("body").unwrap();
        let p = body.child("p").unwrap();
        let style = p.child("pPr").and_then(|ppr| ppr.child("pStyle")).unwrap();
        assert_eq!(style.attr("val"), Some("Heading1"));
        assert_eq!(p.text(), " a & b ");
    }

    #[test]
    fn test_children_named_keeps_order() {
        let xml = b"<r><t>1</t><x/><t>2</t></r>";
        let root = parse_element_tree("part", xml).unwrap();
        let texts: Vec<String> = root.children_named("t").map(|t| t.text()).collect();
        assert_eq!(texts, vec!["1", "2"]);
    }

    #[test]
    fn test_child_outlives_name() {
        let root = parse_element_tree("part", b"<a><b>x</b></a>").unwrap();
        let found = {
            let name = String::from("b");
            root.child(&name)
        };
        assert_eq!(found.map(XmlElement::text).as_deref(), Some("x"));
        assert!(root.child("c").is_none());
    }

    #[test]
    fn test_malformed_xml() {
        assert!(parse_element_tree("part", b"<a><b></a>").is_err());
        assert!(parse_element_tree("part", b"<a>").is_err());
        assert!(parse_element_tree("part", b"").is_err());
    }
}
