//! XML-to-field decoding
//!
//! Decoding happens in two steps. The text is first read with quick-xml into
//! a small generic element tree, then the tree is walked into the typed
//! [`FormDocument`]. Repeated children are always collected into a sequence,
//! so a form with a single `<field>` looks exactly like a form with many.

use super::error::DecodeError;
use super::model::{Field, FieldKind, FieldOption, FormDocument};
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;

/// Generic XML element with its attributes, text and child elements
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Element {
    pub name: String,
    pub attributes: Vec<(String, String)>,
    /// Text and CDATA content, concatenated and then trimmed
    pub text: String,
    pub children: Vec<Element>,
}

impl Element {
    fn new(name: String) -> Self {
        Self {
            name,
            ..Default::default()
        }
    }

    /// Value of the named attribute, if present
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// First child element with the given name
    pub fn child(&self, name: &str) -> Option<&Element> {
        self.children.iter().find(|c| c.name == name)
    }

    /// Text of the first child element with the given name
    pub fn child_text(&self, name: &str) -> Option<&str> {
        self.child(name).map(|c| c.text.as_str())
    }
}

/// Every child of `parent` named `name`, in document order.
///
/// One matching child yields a one-element sequence; none yields an empty one.
pub fn normalize_to_sequence<'a>(parent: &'a Element, name: &str) -> Vec<&'a Element> {
    parent.children.iter().filter(|c| c.name == name).collect()
}

/// Parse XML text into a synthetic document element whose children are the
/// top-level elements of the text.
pub fn parse_tree(xml: &str) -> Result<Element, DecodeError> {
    let mut reader = Reader::from_str(xml);

    let mut stack: Vec<Element> = vec![Element::default()];

    loop {
        match reader.read_event()? {
            Event::Start(ref e) => {
                check_single_root(&stack)?;
                let element = start_element(&reader, e)?;
                stack.push(element);
            }
            Event::Empty(ref e) => {
                check_single_root(&stack)?;
                let element = start_element(&reader, e)?;
                append_child(&mut stack, element)?;
            }
            Event::End(ref e) => {
                let qname = e.name();
                let name = reader.decoder().decode(qname.as_ref())?;
                if stack.len() < 2 {
                    return Err(DecodeError::ParseFailure(format!(
                        "unexpected closing tag </{name}>"
                    )));
                }
                let mut element = stack
                    .pop()
                    .ok_or_else(|| DecodeError::ParseFailure("empty element stack".into()))?;
                if element.name != name {
                    return Err(DecodeError::ParseFailure(format!(
                        "expected </{}>, found </{name}>",
                        element.name
                    )));
                }
                element.text = element.text.trim().to_string();
                append_child(&mut stack, element)?;
            }
            Event::Text(e) => {
                let text = e.unescape()?;
                push_text(&mut stack, &text)?;
            }
            Event::CData(e) => {
                let raw = e.into_inner();
                let text = reader.decoder().decode(&raw)?;
                push_text(&mut stack, &text)?;
            }
            Event::Eof => break,
            // Declarations, comments, processing instructions and doctypes carry no form data
            _ => {}
        }
    }

    if stack.len() > 1 {
        let unclosed = stack.last().map(|e| e.name.clone()).unwrap_or_default();
        return Err(DecodeError::ParseFailure(format!(
            "unclosed element <{unclosed}>"
        )));
    }

    stack
        .pop()
        .ok_or_else(|| DecodeError::ParseFailure("empty element stack".into()))
}

/// A well-formed document has exactly one root element
fn check_single_root(stack: &[Element]) -> Result<(), DecodeError> {
    match stack {
        [document] if !document.children.is_empty() => Err(DecodeError::ParseFailure(
            "more than one root element".into(),
        )),
        _ => Ok(()),
    }
}

fn start_element(reader: &Reader<&[u8]>, start: &BytesStart<'_>) -> Result<Element, DecodeError> {
    let name = reader.decoder().decode(start.name().as_ref())?.into_owned();
    let mut element = Element::new(name);
    for attr in start.attributes() {
        let attr = attr?;
        let key = reader.decoder().decode(attr.key.as_ref())?.into_owned();
        let value = attr.unescape_value()?.into_owned();
        element.attributes.push((key, value));
    }
    Ok(element)
}

fn append_child(stack: &mut [Element], element: Element) -> Result<(), DecodeError> {
    let parent = stack
        .last_mut()
        .ok_or_else(|| DecodeError::ParseFailure("element outside of document".into()))?;
    parent.children.push(element);
    Ok(())
}

fn push_text(stack: &mut [Element], text: &str) -> Result<(), DecodeError> {
    match stack {
        [] => Err(DecodeError::ParseFailure("text outside of document".into())),
        [_] if text.trim().is_empty() => Ok(()),
        [_] => Err(DecodeError::ParseFailure(format!(
            "text outside of the root element: \"{}\"",
            text.trim()
        ))),
        [.., current] => {
            // Trimmed when the element closes
            current.text.push_str(text);
            Ok(())
        }
    }
}

/// Decode raw XML text into a form definition.
///
/// Requires a top-level `form` element holding at least one `field`. Beyond
/// that, missing labels and option sub-elements decode to empty strings; a
/// missing `id` attribute or `type` element is a [`DecodeError::ParseFailure`].
pub fn decode(xml: &str) -> Result<FormDocument, DecodeError> {
    let root = parse_tree(xml)?;

    let form = root.child("form").ok_or(DecodeError::MissingStructure)?;
    let field_elements = normalize_to_sequence(form, "field");
    if field_elements.is_empty() {
        return Err(DecodeError::MissingStructure);
    }

    let fields = field_elements
        .into_iter()
        .map(decode_field)
        .collect::<Result<Vec<_>, _>>()?;

    tracing::debug!("Decoded form with {} field(s)", fields.len());
    Ok(FormDocument { fields })
}

fn decode_field(element: &Element) -> Result<Field, DecodeError> {
    let id = required_attribute(element, "id")?;
    let kind_text = element.child_text("type").ok_or_else(|| {
        DecodeError::ParseFailure(format!("field \"{id}\" has no <type> element"))
    })?;
    let kind = FieldKind::parse(kind_text);
    let label = element.child_text("label").unwrap_or_default().to_string();

    let options = if kind == FieldKind::Radio {
        match element.child("options") {
            Some(options) => normalize_to_sequence(options, "option")
                .into_iter()
                .map(decode_option)
                .collect::<Result<Vec<_>, _>>()?,
            None => Vec::new(),
        }
    } else {
        Vec::new()
    };

    Ok(Field {
        id,
        kind,
        label,
        options,
    })
}

fn decode_option(element: &Element) -> Result<FieldOption, DecodeError> {
    Ok(FieldOption {
        id: required_attribute(element, "id")?,
        value: element.child_text("value").unwrap_or_default().to_string(),
        label: element.child_text("label").unwrap_or_default().to_string(),
    })
}

fn required_attribute(element: &Element, name: &str) -> Result<String, DecodeError> {
    element
        .attribute(name)
        .map(str::to_string)
        .ok_or_else(|| {
            DecodeError::ParseFailure(format!(
                "<{}> is missing the \"{name}\" attribute",
                element.name
            ))
        })
}
