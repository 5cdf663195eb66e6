//! Messages handed to the relayer for submission.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use derive_more::From;
use ibc_proto::google::protobuf::Any;
use serde_json::{json, Value};

use crate::error::Error;

/// An SDK message destined for an LBM chain.
#[derive(Clone, Debug, PartialEq)]
pub struct LbmMessage {
    pub msg: Any,
}

impl LbmMessage {
    pub fn new(msg: Any) -> Self {
        Self { msg }
    }

    /// The message type URL, e.g. `/ibc.core.client.v1.MsgUpdateClient`.
    pub fn type_url(&self) -> &str {
        &self.msg.type_url
    }

    /// Protobuf encoding of the wrapped message.
    pub fn msg_bytes(&self) -> Vec<u8> {
        self.msg.value.clone()
    }

    /// JSON object for structured logs.
    pub fn log_json(&self) -> Value {
        json!({
            "msg_json": {
                "type_url": self.msg.type_url,
                "value": BASE64.encode(&self.msg.value),
            }
        })
    }
}

/// The messages a relayer can carry, tagged by destination chain type.
#[derive(Clone, Debug, PartialEq, From)]
pub enum RelayerMessage {
    Cosmos(Any),
    Lbm(LbmMessage),
}

impl RelayerMessage {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Cosmos(_) => "cosmos",
            Self::Lbm(_) => "lbm",
        }
    }
}

/// Unwraps an LBM message, or `None` if `msg` is of another kind.
pub fn lbm_msg(msg: &RelayerMessage) -> Option<&Any> {
    match msg {
        RelayerMessage::Lbm(LbmMessage { msg }) => Some(msg),
        _ => None,
    }
}

/// Unwraps a batch of LBM messages, failing on the first message of another
/// kind.
pub fn lbm_msgs(msgs: &[RelayerMessage]) -> Result<Vec<Any>, Error> {
    msgs.iter()
        .enumerate()
        .map(|(index, msg)| {
            lbm_msg(msg).cloned().ok_or_else(|| Error::UnexpectedMessage {
                index,
                kind: msg.kind(),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn any(type_url: &str, value: &[u8]) -> Any {
        Any {
            type_url: type_url.to_string(),
            value: value.to_vec(),
        }
    }

    #[test]
    fn message_accessors() {
        let msg = LbmMessage::new(any("/ibc.core.client.v1.MsgUpdateClient", &[1, 2, 3]));

        assert_eq!(msg.type_url(), "/ibc.core.client.v1.MsgUpdateClient");
        assert_eq!(msg.msg_bytes(), vec![1, 2, 3]);
        assert_eq!(
            msg.log_json()["msg_json"]["value"],
            Value::String("AQID".to_string())
        );
    }

    #[test]
    fn unwraps_lbm_message() {
        let inner = any("/cosmos.bank.v1beta1.MsgSend", b"send");
        let msg = RelayerMessage::from(LbmMessage::new(inner.clone()));

        assert_eq!(lbm_msg(&msg), Some(&inner));
    }

    #[test]
    fn foreign_message_is_not_unwrapped() {
        let msg = RelayerMessage::from(any("/cosmos.bank.v1beta1.MsgSend", b"send"));
        assert_eq!(lbm_msg(&msg), None);
    }

    #[test]
    fn batch_keeps_order() {
        let msgs: Vec<RelayerMessage> = (0u8..3)
            .map(|i| LbmMessage::new(any("/a", &[i])).into())
            .collect();

        let unwrapped = lbm_msgs(&msgs).unwrap();

        assert_eq!(unwrapped.len(), 3);
        assert_eq!(unwrapped[2].value, vec![2]);
    }

    #[test]
    fn batch_with_foreign_message_fails() {
        let msgs = vec![
            RelayerMessage::from(LbmMessage::new(any("/a", b"a"))),
            RelayerMessage::from(any("/b", b"b")),
        ];

        match lbm_msgs(&msgs) {
            Err(Error::UnexpectedMessage { index, kind }) => {
                assert_eq!(index, 1);
                assert_eq!(kind, "cosmos");
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }
}
