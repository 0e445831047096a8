use std::rc::Rc;

use super::NodeType;

/// Common accessors of `Text`, `CDATASection` and `Comment`.
pub trait CharacterData {
    /// Implementation of `data` attribute.
    fn data(&self) -> &str;

    /// Implementation of `length` attribute.
    ///
    /// The length is counted in UTF-16 code units.
    fn length(&self) -> usize {
        self.data().encode_utf16().count()
    }

    /// Implementation of `nodeType` attribute.
    fn node_type(&self) -> NodeType;
}

macro_rules! impl_character_data {
    ( $( $(#[$meta:meta])* $name:ident => $node_type:ident ),* $(,)? ) => {
        $(
            $(#[$meta])*
            #[derive(Debug, Clone, PartialEq, Eq)]
            pub struct $name {
                data: Rc<str>,
            }

            impl $name {
                pub fn new(data: impl Into<Rc<str>>) -> Self {
                    Self { data: data.into() }
                }
            }

            impl CharacterData for $name {
                fn data(&self) -> &str {
                    &self.data
                }

                fn node_type(&self) -> NodeType {
                    NodeType::$node_type
                }
            }
        )*
    };
}

impl_character_data! {
    /// A run of character data as reported by one `characters` event.
    ///
    /// Adjacent runs are not merged.
    Text => Text,
    /// The content of one `<![CDATA[ ... ]]>` section.
    CDATASection => CDATASection,
    /// The content of one `<!-- ... -->` comment, without the delimiters.
    Comment => Comment,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn character_data_length_test() {
        let text = Text::new("あいう");
        assert_eq!(text.data(), "あいう");
        assert_eq!(text.length(), 3);
        assert_eq!(text.node_type(), NodeType::Text);

        let cdata = CDATASection::new("a\u{1F600}");
        assert_eq!(cdata.length(), 3);
        assert_eq!(cdata.node_type(), NodeType::CDATASection);

        assert_eq!(Comment::new(" c1 ").node_type(), NodeType::Comment);
    }
}
