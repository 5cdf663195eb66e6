use ibc_proto::cosmos::base::abci::v1beta1::{Attribute, StringEvent};
use tendermint_proto::v0_34::abci::Event;

/// Converts an Ostracon event, whose attributes are raw bytes, into an SDK
/// `StringEvent`. Attributes keep their order and duplicates.
pub fn stringify_event(event: &Event) -> StringEvent {
    StringEvent {
        r#type: event.r#type.clone(),
        attributes: event
            .attributes
            .iter()
            .map(|attr| Attribute {
                key: String::from_utf8_lossy(&attr.key[..]).into_owned(),
                value: String::from_utf8_lossy(&attr.value[..]).into_owned(),
            })
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use tendermint_proto::v0_34::abci::EventAttribute;

    use super::*;

    fn attribute(key: &'static str, value: &'static str) -> EventAttribute {
        EventAttribute {
            key: key.into(),
            value: value.into(),
            index: true,
        }
    }

    #[test]
    fn preserves_order_and_duplicates() {
        let event = Event {
            r#type: "transfer".to_string(),
            attributes: vec![attribute("a", "1"), attribute("b", "2"), attribute("a", "3")],
        };

        let decoded = stringify_event(&event);

        assert_eq!(decoded.r#type, "transfer");
        let pairs: Vec<_> = decoded
            .attributes
            .iter()
            .map(|attr| (attr.key.as_str(), attr.value.as_str()))
            .collect();
        assert_eq!(pairs, vec![("a", "1"), ("b", "2"), ("a", "3")]);
    }

    #[test]
    fn event_without_attributes() {
        let event = Event {
            r#type: "message".to_string(),
            attributes: vec![],
        };

        let decoded = stringify_event(&event);
        assert_eq!(decoded.r#type, "message");
        assert!(decoded.attributes.is_empty());
    }

    #[test]
    fn invalid_utf8_does_not_fail() {
        let event = Event {
            r#type: "raw".to_string(),
            attributes: vec![EventAttribute {
                key: b"k\xff".to_vec().into(),
                value: b"\xf0\x28".to_vec().into(),
                index: false,
            }],
        };

        let decoded = stringify_event(&event);
        assert_eq!(decoded.attributes.len(), 1);
        assert!(decoded.attributes[0].key.starts_with('k'));
    }
}
