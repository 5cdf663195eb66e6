use ics23::CommitmentProof;
use prost::Message;
use tendermint::merkle::proof::ProofOps;
use tracing::trace;

use crate::error::Error;

/// A multi-layer ICS-23 proof, innermost layer (sub-store proof) first.
///
/// Mirrors `ibc.core.commitment.v1.MerkleProof`, which is what counterparty
/// light clients verify against.
#[derive(Clone, Debug, PartialEq)]
pub struct MerkleProof {
    proofs: Vec<CommitmentProof>,
}

impl MerkleProof {
    pub fn proofs(&self) -> &[CommitmentProof] {
        &self.proofs
    }

    pub fn into_proofs(self) -> Vec<CommitmentProof> {
        self.proofs
    }

    pub fn len(&self) -> usize {
        self.proofs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.proofs.is_empty()
    }

    /// Encodes the proof as an `ibc.core.commitment.v1.MerkleProof` message.
    pub fn encode_vec(&self) -> Vec<u8> {
        let mut buf = Vec::new();
        for proof in &self.proofs {
            prost::encoding::message::encode(1, proof, &mut buf);
        }
        buf
    }
}

/// Decodes every op of an Ostracon proof into an ICS-23 commitment proof.
///
/// A single undecodable op fails the whole conversion, since verification
/// needs all layers in order.
pub fn convert_proofs(proof_ops: Option<&ProofOps>) -> Result<MerkleProof, Error> {
    let ops = match proof_ops {
        Some(proof_ops) if !proof_ops.ops.is_empty() => &proof_ops.ops,
        _ => return Err(Error::ProofUnavailable),
    };

    let proofs = ops
        .iter()
        .enumerate()
        .map(|(index, op)| {
            trace!(index, field_type = %op.field_type, "decoding proof op");
            match CommitmentProof::decode(op.data.as_slice()) {
                Ok(proof) if proof.proof.is_some() => Ok(proof),
                Ok(_) => Err(Error::ProofDecode {
                    index,
                    reason: "proof is empty".to_string(),
                }),
                Err(e) => Err(Error::ProofDecode {
                    index,
                    reason: e.to_string(),
                }),
            }
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(MerkleProof { proofs })
}

#[cfg(test)]
pub(crate) mod tests {
    use ics23::commitment_proof::Proof;
    use ics23::{ExistenceProof, HashOp, LeafOp, LengthOp};
    use tendermint::merkle::proof::ProofOp;

    use super::*;

    pub(crate) fn existence_proof(key: &[u8], value: &[u8]) -> CommitmentProof {
        CommitmentProof {
            proof: Some(Proof::Exist(ExistenceProof {
                key: key.to_vec(),
                value: value.to_vec(),
                leaf: Some(LeafOp {
                    hash: HashOp::Sha256.into(),
                    prehash_key: HashOp::NoHash.into(),
                    prehash_value: HashOp::Sha256.into(),
                    length: LengthOp::VarProto.into(),
                    prefix: vec![0],
                }),
                path: vec![],
            })),
        }
    }

    pub(crate) fn proof_op(key: &[u8], data: Vec<u8>) -> ProofOp {
        ProofOp {
            field_type: "ics23:iavl".to_string(),
            key: key.to_vec(),
            data,
        }
    }

    pub(crate) fn well_formed_ops(n: usize) -> (ProofOps, Vec<CommitmentProof>) {
        let proofs: Vec<_> = (0..n)
            .map(|i| existence_proof(format!("key{i}").as_bytes(), &[i as u8]))
            .collect();
        let ops = proofs
            .iter()
            .enumerate()
            .map(|(i, p)| proof_op(format!("key{i}").as_bytes(), p.encode_to_vec()))
            .collect();
        (ProofOps { ops }, proofs)
    }

    #[test]
    fn absent_proof_is_unavailable() {
        assert!(matches!(convert_proofs(None), Err(Error::ProofUnavailable)));
    }

    #[test]
    fn empty_proof_is_unavailable() {
        let ops = ProofOps { ops: vec![] };
        assert!(matches!(
            convert_proofs(Some(&ops)),
            Err(Error::ProofUnavailable)
        ));
    }

    #[test]
    fn keeps_length_and_order() {
        let (ops, expected) = well_formed_ops(3);

        let proof = convert_proofs(Some(&ops)).unwrap();

        assert_eq!(proof.len(), 3);
        assert_eq!(proof.proofs(), expected.as_slice());
    }

    #[test]
    fn corrupted_op_reports_its_index() {
        for k in 0..3 {
            let (mut ops, _) = well_formed_ops(3);
            ops.ops[k].data = vec![0xff, 0xff, 0xff];

            match convert_proofs(Some(&ops)) {
                Err(Error::ProofDecode { index, reason }) => {
                    assert_eq!(index, k);
                    assert!(!reason.is_empty());
                }
                other => panic!("unexpected result: {other:?}"),
            }
        }
    }

    #[test]
    fn empty_commitment_proof_is_rejected() {
        let (mut ops, _) = well_formed_ops(2);
        ops.ops[1].data = vec![];

        match convert_proofs(Some(&ops)) {
            Err(Error::ProofDecode { index, .. }) => assert_eq!(index, 1),
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn first_failure_wins() {
        let (mut ops, _) = well_formed_ops(4);
        ops.ops[1].data = vec![0xff];
        ops.ops[3].data = vec![0xff];

        match convert_proofs(Some(&ops)) {
            Err(Error::ProofDecode { index, .. }) => assert_eq!(index, 1),
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn encodes_proofs_as_repeated_field() {
        let (ops, expected) = well_formed_ops(2);
        let proof = convert_proofs(Some(&ops)).unwrap();

        let bytes = proof.encode_vec();
        let first_len = expected[0].encoded_len();

        // field 1, length-delimited
        assert_eq!(bytes[0], 0x0a);
        assert_eq!(bytes[1] as usize, first_len);
        assert_eq!(bytes[2 + first_len], 0x0a);
    }
}
