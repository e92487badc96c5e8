#![allow(dead_code)]
use std::net::SocketAddr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::net::UdpSocket;
use tokio::sync::oneshot;

pub struct MockDnsServer {
    addr: SocketAddr,
    received: Arc<AtomicUsize>,
    shutdown_tx: Option<oneshot::Sender<()>>,
}

impl MockDnsServer {
    /// Binds 127.0.0.1 on an ephemeral port. The handler gets the raw query
    /// and its sequence number; returning `None` drops the query.
    pub async fn start<F>(handler: F) -> Result<Self, std::io::Error>
    where
        F: Fn(&[u8], usize) -> Option<Vec<u8>> + Send + Sync + 'static,
    {
        let socket = UdpSocket::bind(SocketAddr::from(([127, 0, 0, 1], 0))).await?;
        let addr = socket.local_addr()?;
        let received = Arc::new(AtomicUsize::new(0));
        let counter = received.clone();

        let (shutdown_tx, mut shutdown_rx) = oneshot::channel();

        tokio::spawn(async move {
            let mut buf = vec![0u8; 512];

            loop {
                tokio::select! {
                    _ = &mut shutdown_rx => {
                        break;
                    }
                    result = socket.recv_from(&mut buf) => {
                        if let Ok((len, peer)) = result {
                            let seq = counter.fetch_add(1, Ordering::SeqCst);
                            if let Some(response) = handler(&buf[..len], seq) {
                                let _ = socket.send_to(&response, peer).await;
                            }
                        }
                    }
                }
            }
        });

        Ok(Self {
            addr,
            received,
            shutdown_tx: Some(shutdown_tx),
        })
    }

    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    pub fn port(&self) -> u16 {
        self.addr.port()
    }

    pub fn received(&self) -> usize {
        self.received.load(Ordering::SeqCst)
    }

    pub fn shutdown(mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}

impl Drop for MockDnsServer {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}

/// Reply header: query ID, QR|RD|RA, echoed question, given section counts.
fn reply_header(query: &[u8], an: u16, ns: u16, ar: u16) -> Vec<u8> {
    let mut response = Vec::with_capacity(512);
    response.extend_from_slice(&query[0..2]);
    response.push(0x81);
    response.push(0x80);
    response.extend_from_slice(&query[4..6]);
    response.extend_from_slice(&an.to_be_bytes());
    response.extend_from_slice(&ns.to_be_bytes());
    response.extend_from_slice(&ar.to_be_bytes());
    response.extend_from_slice(&query[12..]);
    response
}

/// Answer for the queried name, owner compressed to offset 12.
pub fn answer_reply(query: &[u8], ip: [u8; 4]) -> Vec<u8> {
    let mut response = reply_header(query, 1, 0, 0);
    response.extend_from_slice(&[
        0xc0, 0x0c,
        0x00, 0x01,
        0x00, 0x01,
        0x00, 0x00, 0x00, 0x3c,
        0x00, 0x04,
    ]);
    response.extend_from_slice(&ip);
    response
}

/// Referral to `ns1.<qname>` with an A glue record pointing back into the
/// NS rdata.
pub fn glue_referral_reply(query: &[u8], glue: [u8; 4]) -> Vec<u8> {
    let mut response = reply_header(query, 0, 1, 1);
    let ns_rdata_offset = response.len() + 12;
    response.extend_from_slice(&[
        0xc0, 0x0c,
        0x00, 0x02,
        0x00, 0x01,
        0x00, 0x02, 0xa3, 0x00,
        0x00, 0x06,
        0x03, b'n', b's', b'1',
        0xc0, 0x0c,
    ]);
    let pointer = 0xc000 | ns_rdata_offset as u16;
    response.extend_from_slice(&pointer.to_be_bytes());
    response.extend_from_slice(&[
        0x00, 0x01,
        0x00, 0x01,
        0x00, 0x02, 0xa3, 0x00,
        0x00, 0x04,
    ]);
    response.extend_from_slice(&glue);
    response
}

/// Header and question only.
pub fn empty_reply(query: &[u8]) -> Vec<u8> {
    reply_header(query, 0, 0, 0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_server_responds() {
        let server = MockDnsServer::start(|query, _| Some(answer_reply(query, [1, 2, 3, 4])))
            .await
            .unwrap();

        let client = UdpSocket::bind("127.0.0.1:0").await.unwrap();
        let query = vec![
            0x12, 0x34,
            0x01, 0x00,
            0x00, 0x01,
            0x00, 0x00,
            0x00, 0x00,
            0x00, 0x00,
        ];
        client.send_to(&query, server.addr()).await.unwrap();

        let mut buf = vec![0u8; 512];
        let (len, _) = client.recv_from(&mut buf).await.unwrap();

        assert!(len > 12);
        assert_eq!(buf[0..2], query[0..2]);
        assert_eq!(buf[2] & 0x80, 0x80);
        assert_eq!(server.received(), 1);
    }
}
