use crate::errors::DnsError;

/// Fixed size of the DNS message header (RFC 1035 §4.1.1).
pub const HEADER_LEN: usize = 12;

/// The 12-byte message header. Flag fields live in bytes 2 and 3,
/// packed MSB-first:
///
/// byte 2: `qr(1) opcode(4) aa(1) tc(1) rd(1)`
/// byte 3: `ra(1) z(3) rcode(4)`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Header {
    pub id: u16,
    pub qr: bool,
    pub opcode: u8,
    pub aa: bool,
    pub tc: bool,
    pub rd: bool,
    pub ra: bool,
    pub z: u8,
    pub rcode: u8,
    pub qdcount: u16,
    pub ancount: u16,
    pub nscount: u16,
    pub arcount: u16,
}

impl Header {
    pub fn parse(buf: &[u8]) -> Result<Self, DnsError> {
        if buf.len() < HEADER_LEN {
            return Err(DnsError::Format(format!(
                "datagram too short for header: {} bytes",
                buf.len()
            )));
        }

        let flags = buf[2];
        let flags2 = buf[3];

        Ok(Self {
            id: u16::from_be_bytes([buf[0], buf[1]]),
            qr: flags & 0x80 != 0,
            opcode: (flags >> 3) & 0x0F,
            aa: flags & 0x04 != 0,
            tc: flags & 0x02 != 0,
            rd: flags & 0x01 != 0,
            ra: flags2 & 0x80 != 0,
            z: (flags2 >> 4) & 0x07,
            rcode: flags2 & 0x0F,
            qdcount: u16::from_be_bytes([buf[4], buf[5]]),
            ancount: u16::from_be_bytes([buf[6], buf[7]]),
            nscount: u16::from_be_bytes([buf[8], buf[9]]),
            arcount: u16::from_be_bytes([buf[10], buf[11]]),
        })
    }

    pub fn write(&self, out: &mut Vec<u8>) {
        out.extend_from_slice(&self.id.to_be_bytes());
        out.push(
            (self.qr as u8) << 7
                | (self.opcode & 0x0F) << 3
                | (self.aa as u8) << 2
                | (self.tc as u8) << 1
                | self.rd as u8,
        );
        out.push((self.ra as u8) << 7 | (self.z & 0x07) << 4 | (self.rcode & 0x0F));
        out.extend_from_slice(&self.qdcount.to_be_bytes());
        out.extend_from_slice(&self.ancount.to_be_bytes());
        out.extend_from_slice(&self.nscount.to_be_bytes());
        out.extend_from_slice(&self.arcount.to_be_bytes());
    }
}
