use super::XmlError;
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use tracing::trace;

/// A node of the document tree
#[derive(Debug, Clone, PartialEq)]
pub enum XmlNode {
    Element(XmlElementNode),
    Text(String),
    CData(String),
    Comment(String),
}

impl XmlNode {
    pub fn as_element(&self) -> Option<&XmlElementNode> {
        match self {
            XmlNode::Element(element) => Some(element),
            _ => None,
        }
    }
}

/// An element with its attributes and children, in document order
#[derive(Debug, Clone, PartialEq, Default)]
pub struct XmlElementNode {
    name: String,
    attributes: Vec<(String, String)>,
    children: Vec<XmlNode>,
}

impl XmlElementNode {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.push((key.into(), value.into()));
        self
    }

    pub fn with_child(mut self, child: XmlElementNode) -> Self {
        self.children.push(XmlNode::Element(child));
        self
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.children.push(XmlNode::Text(text.into()));
        self
    }

    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.children.push(XmlNode::Comment(comment.into()));
        self
    }

    /// Parse XML text and return its root element
    ///
    /// Text is trimmed and whitespace-only text is dropped, so pretty-printed
    /// documents yield the same tree as compact ones.
    pub fn parse(xml: &str) -> Result<Self, XmlError> {
        let mut reader = Reader::from_str(xml);
        reader.trim_text(true);

        let mut stack: Vec<XmlElementNode> = Vec::new();
        let mut root: Option<XmlElementNode> = None;
        let mut buf = Vec::new();

        loop {
            match reader.read_event_into(&mut buf)? {
                Event::Start(ref e) => {
                    stack.push(Self::open(e)?);
                }
                Event::Empty(ref e) => {
                    let element = Self::open(e)?;
                    Self::attach(&mut stack, &mut root, XmlNode::Element(element))?;
                }
                Event::End(_) => {
                    if let Some(element) = stack.pop() {
                        Self::attach(&mut stack, &mut root, XmlNode::Element(element))?;
                    }
                }
                Event::Text(ref e) => {
                    let text = e.unescape()?.into_owned();
                    if !text.is_empty() {
                        Self::attach(&mut stack, &mut root, XmlNode::Text(text))?;
                    }
                }
                Event::CData(ref e) => {
                    let text = String::from_utf8_lossy(e).into_owned();
                    Self::attach(&mut stack, &mut root, XmlNode::CData(text))?;
                }
                Event::Comment(ref e) => {
                    let text = String::from_utf8_lossy(e).into_owned();
                    Self::attach(&mut stack, &mut root, XmlNode::Comment(text))?;
                }
                Event::Eof => break,
                _ => {}
            }
            buf.clear();
        }

        if let Some(unclosed) = stack.pop() {
            return Err(XmlError::Unclosed(unclosed.name));
        }

        root.ok_or(XmlError::MissingRoot)
    }

    fn open(start: &BytesStart) -> Result<Self, XmlError> {
        let mut element = XmlElementNode::new(String::from_utf8_lossy(start.name().as_ref()));
        for attr in start.attributes() {
            let attr = attr?;
            let key = String::from_utf8_lossy(attr.key.as_ref()).into_owned();
            let value = attr.unescape_value()?.into_owned();
            element.attributes.push((key, value));
        }
        Ok(element)
    }

    /// Append a node to the open element, or make it the root
    ///
    /// A second top-level element is an error; top-level text and comments
    /// are dropped.
    fn attach(
        stack: &mut [XmlElementNode],
        root: &mut Option<XmlElementNode>,
        node: XmlNode,
    ) -> Result<(), XmlError> {
        match stack.last_mut() {
            Some(parent) => parent.children.push(node),
            None => match node {
                XmlNode::Element(element) if root.is_none() => *root = Some(element),
                XmlNode::Element(element) => return Err(XmlError::MultipleRoots(element.name)),
                other => trace!("Ignoring node outside the root element: {:?}", other),
            },
        }
        Ok(())
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn attribute(&self, key: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn children(&self) -> &[XmlNode] {
        &self.children
    }

    /// Element children only, skipping text and comments
    pub fn child_elements(&self) -> impl Iterator<Item = &XmlElementNode> {
        self.children.iter().filter_map(XmlNode::as_element)
    }

    /// Concatenated text of all descendant text and CDATA nodes
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        for child in &self.children {
            match child {
                XmlNode::Text(text) | XmlNode::CData(text) => out.push_str(text),
                XmlNode::Element(element) => element.collect_text(out),
                XmlNode::Comment(_) => {}
            }
        }
    }

    /// All descendant elements named `name`, depth-first in document order
    pub fn descendants(&self, name: &str) -> Vec<&XmlElementNode> {
        let mut found = Vec::new();
        self.collect_descendants(name, &mut found);
        found
    }

    fn collect_descendants<'a>(&'a self, name: &str, found: &mut Vec<&'a XmlElementNode>) {
        for element in self.child_elements() {
            if element.name == name {
                found.push(element);
            }
            element.collect_descendants(name, found);
        }
    }
}
