//! `GetPeers`.

use ledger_data_model::prelude::*;

use crate::wsv::WorldStateReader;

pub fn get_peers<R: WorldStateReader>(reader: &R) -> Result<PeersResponse, QueryError> {
    Ok(PeersResponse {
        peers: reader.get_peers(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wsv::InMemoryWorldStateView;

    #[test]
    fn returns_every_registered_peer() {
        let wsv = InMemoryWorldStateView::new();
        wsv.insert_peer(Peer::new(
            "127.0.0.1:1337".to_owned(),
            PublicKey::from_bytes(vec![1, 2, 3]),
            None,
        ));
        let response = get_peers(&wsv).unwrap();
        assert_eq!(response.peers.len(), 1);
    }
}
