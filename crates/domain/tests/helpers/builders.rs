#![allow(dead_code)]

/// Builds raw query datagrams byte by byte, independent of the codecs
/// under test.
pub struct QueryBytesBuilder {
    id: u16,
    rd: bool,
    qdcount: u16,
    ancount: u16,
    nscount: u16,
    arcount: u16,
    name: String,
    qtype: u16,
    qclass: u16,
    trailing: Vec<u8>,
}

impl QueryBytesBuilder {
    pub fn new() -> Self {
        Self {
            id: 0x1234,
            rd: true,
            qdcount: 1,
            ancount: 0,
            nscount: 0,
            arcount: 0,
            name: "test.izk".to_string(),
            qtype: 1,
            qclass: 1,
            trailing: Vec::new(),
        }
    }

    pub fn id(mut self, id: u16) -> Self {
        self.id = id;
        self
    }

    pub fn rd(mut self, rd: bool) -> Self {
        self.rd = rd;
        self
    }

    pub fn name(mut self, name: &str) -> Self {
        self.name = name.to_string();
        self
    }

    pub fn qtype(mut self, qtype: u16) -> Self {
        self.qtype = qtype;
        self
    }

    pub fn qclass(mut self, qclass: u16) -> Self {
        self.qclass = qclass;
        self
    }

    pub fn qdcount(mut self, count: u16) -> Self {
        self.qdcount = count;
        self
    }

    pub fn ancount(mut self, count: u16) -> Self {
        self.ancount = count;
        self
    }

    pub fn arcount(mut self, count: u16) -> Self {
        self.arcount = count;
        self
    }

    pub fn trailing(mut self, bytes: &[u8]) -> Self {
        self.trailing = bytes.to_vec();
        self
    }

    pub fn build(self) -> Vec<u8> {
        let mut buf = Vec::new();
        buf.extend_from_slice(&self.id.to_be_bytes());
        buf.push(self.rd as u8);
        buf.push(0x00);
        buf.extend_from_slice(&self.qdcount.to_be_bytes());
        buf.extend_from_slice(&self.ancount.to_be_bytes());
        buf.extend_from_slice(&self.nscount.to_be_bytes());
        buf.extend_from_slice(&self.arcount.to_be_bytes());

        for label in self.name.split('.').filter(|l| !l.is_empty()) {
            buf.push(label.len() as u8);
            buf.extend_from_slice(label.as_bytes());
        }
        buf.push(0x00);

        buf.extend_from_slice(&self.qtype.to_be_bytes());
        buf.extend_from_slice(&self.qclass.to_be_bytes());
        buf.extend_from_slice(&self.trailing);
        buf
    }
}

impl Default for QueryBytesBuilder {
    fn default() -> Self {
        Self::new()
    }
}
