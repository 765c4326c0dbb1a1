#![allow(dead_code)]
use sidechain_consensus::types::{BwtRequestOut, Certificate, ForwardTransferOut, ScId, Transaction};

pub fn scid(tag: u8) -> ScId {
    let mut id = [0u8; 32];
    id[0] = tag;
    id[31] = 0x5c;
    id
}

pub fn forward_transfer(sc_tag: u8, amount: u64) -> ForwardTransferOut {
    ForwardTransferOut {
        sc_id: scid(sc_tag),
        amount,
        address: [amount as u8; 32],
    }
}

pub fn bwt_request(sc_tag: u8, sc_fee: u64) -> BwtRequestOut {
    BwtRequestOut {
        sc_id: scid(sc_tag),
        sc_fee,
        mc_destination: [sc_fee as u8; 20],
        sc_request_data: vec![[sc_tag; 32]],
    }
}

pub fn sc_transaction(
    forward_transfers: Vec<ForwardTransferOut>,
    backward_transfer_requests: Vec<BwtRequestOut>,
) -> Transaction {
    Transaction::new_sidechain(forward_transfers, backward_transfer_requests)
}

pub fn certificate(sc_tag: u8, epoch_number: i32) -> Certificate {
    Certificate::new(scid(sc_tag), epoch_number, i64::from(epoch_number) * 10)
}
