mod common;

use common::{bwt_request, certificate, forward_transfer, sc_transaction};
use proptest::prelude::*;
use sidechain_consensus::{
    Certificate, CommitmentConfig, SidechainTxsCommitmentBuilder, Transaction,
    compute_sidechain_commitment,
};

fn distinct_certificates() -> impl Strategy<Value = (Vec<Certificate>, Vec<Certificate>)> {
    proptest::collection::btree_map(any::<u8>(), 0i32..1000, 1..8).prop_flat_map(|epochs| {
        let certs: Vec<Certificate> = epochs
            .into_iter()
            .map(|(tag, epoch)| certificate(tag, epoch))
            .collect();
        (Just(certs.clone()), Just(certs).prop_shuffle())
    })
}

fn per_sidechain_transactions() -> impl Strategy<Value = (Vec<Transaction>, Vec<Transaction>)> {
    proptest::collection::btree_map(any::<u8>(), (0usize..4, 0usize..3), 1..6).prop_flat_map(
        |shapes| {
            let txs: Vec<Transaction> = shapes
                .into_iter()
                .map(|(tag, (fts, btrs))| {
                    sc_transaction(
                        (0..fts).map(|i| forward_transfer(tag, i as u64 + 1)).collect(),
                        (0..btrs).map(|i| bwt_request(tag, i as u64 + 1)).collect(),
                    )
                })
                .collect();
            (Just(txs.clone()), Just(txs).prop_shuffle())
        },
    )
}

proptest! {
    #[test]
    fn certificate_order_does_not_matter((ordered, shuffled) in distinct_certificates()) {
        let config = CommitmentConfig::default();
        let no_txs: &[Transaction] = &[];
        let expected = compute_sidechain_commitment(no_txs, &ordered, &config).unwrap();
        let actual = compute_sidechain_commitment(no_txs, &shuffled, &config).unwrap();
        prop_assert_eq!(expected, actual);
    }

    #[test]
    fn sidechain_order_does_not_matter((ordered, shuffled) in per_sidechain_transactions()) {
        let config = CommitmentConfig::default();
        let no_certs: &[Certificate] = &[];
        let expected = compute_sidechain_commitment(&ordered, no_certs, &config).unwrap();
        let actual = compute_sidechain_commitment(&shuffled, no_certs, &config).unwrap();
        prop_assert_eq!(expected, actual);
    }

    #[test]
    fn repeated_computation_is_stable((txs, _) in per_sidechain_transactions()) {
        let mut first = SidechainTxsCommitmentBuilder::default();
        let mut second = SidechainTxsCommitmentBuilder::default();
        for tx in &txs {
            first.add_transaction(tx).unwrap();
            second.add_transaction(tx).unwrap();
        }
        prop_assert_eq!(
            first.sidechain_commitments().unwrap(),
            second.sidechain_commitments().unwrap()
        );
        prop_assert_eq!(first.compute_commitment().unwrap(), second.compute_commitment().unwrap());
    }
}
