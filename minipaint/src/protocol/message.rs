use bincode::Options;
use custom_error::custom_error;
use serde::{Serialize, Deserialize};

use minipaint_core::models::canvas::Coordinate;
use minipaint_core::models::pixel::Pixel;

pub const PACKET_SIZE: usize = 20;

pub const OPCODE_HANDSHAKE: i32 = 0;
pub const OPCODE_DRAW_POINT: i32 = 1;
pub const OPCODE_END_STROKE: i32 = 2;
pub const OPCODE_UNDO: i32 = 3;
pub const OPCODE_REDO: i32 = 4;
pub const OPCODE_FILL: i32 = 5;
pub const OPCODE_QUIT: i32 = 6;

custom_error! {pub PacketError
    UnknownOpcode {opcode: i32} = "Unknown opcode: {opcode}",
    Malformed {description: String} = "Malformed packet: {description}",
}

// | opcode | field1 | field2 | field3 | field4 |
// |--------|--------|--------|--------|--------|
// | 0 handshake  | 0 | 0 | 0     | 0      |
// | 1 draw point | x | y | color | radius |
// | 2 end stroke | 0 | 0 | 0     | 0      |
// | 3 undo       | 0 | 0 | 0     | 0      |
// | 4 redo       | 0 | 0 | 0     | 0      |
// | 5 fill       | 0 | 0 | color | 0      |
// | 6 quit       | 0 | 0 | 0     | 0      |
// colors are packed as 0xRRGGBBAA and bit-cast into the signed field
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Packet {
    Handshake,
    DrawPoint { x: i32, y: i32, color: Pixel, radius: i32 },
    EndStroke,
    Undo,
    Redo,
    Fill { color: Pixel },
    Quit,
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct RawPacket {
    pub opcode: i32,
    pub fields: [i32; 4],
}

impl Packet {

    pub fn draw_point(at: Coordinate, color: Pixel, radius: i32) -> Self {
        Packet::DrawPoint {
            x: at.x,
            y: at.y,
            color,
            radius,
        }
    }

    pub fn opcode(&self) -> i32 {
        match self {
            Packet::Handshake => OPCODE_HANDSHAKE,
            Packet::DrawPoint { .. } => OPCODE_DRAW_POINT,
            Packet::EndStroke => OPCODE_END_STROKE,
            Packet::Undo => OPCODE_UNDO,
            Packet::Redo => OPCODE_REDO,
            Packet::Fill { .. } => OPCODE_FILL,
            Packet::Quit => OPCODE_QUIT,
        }
    }

    pub fn to_raw(&self) -> RawPacket {
        let fields = match *self {
            Packet::DrawPoint { x, y, color, radius } => [x, y, color.to_rgba_u32() as i32, radius],
            Packet::Fill { color } => [0, 0, color.to_rgba_u32() as i32, 0],
            _ => [0; 4],
        };

        RawPacket {
            opcode: self.opcode(),
            fields,
        }
    }

    pub fn from_raw(raw: &RawPacket) -> Result<Self, PacketError> {
        let [field1, field2, field3, field4] = raw.fields;

        Ok(match raw.opcode {
            OPCODE_HANDSHAKE => Packet::Handshake,
            OPCODE_DRAW_POINT => Packet::DrawPoint {
                x: field1,
                y: field2,
                color: Pixel::from_rgba_u32(field3 as u32),
                radius: field4,
            },
            OPCODE_END_STROKE => Packet::EndStroke,
            OPCODE_UNDO => Packet::Undo,
            OPCODE_REDO => Packet::Redo,
            OPCODE_FILL => Packet::Fill {
                color: Pixel::from_rgba_u32(field3 as u32),
            },
            OPCODE_QUIT => Packet::Quit,
            opcode => return Err(PacketError::UnknownOpcode { opcode }),
        })
    }

    pub fn encode(&self) -> Result<Vec<u8>, PacketError> {
        wire_options().serialize(&self.to_raw()).map_err(|err| PacketError::Malformed {
            description: format!("failed to serialize packet: {}", err),
        })
    }

    pub fn decode(data: &[u8]) -> Result<Self, PacketError> {
        if data.len() != PACKET_SIZE {
            return Err(PacketError::Malformed {
                description: format!("expected {} bytes, got {}", PACKET_SIZE, data.len()),
            });
        }

        let raw: RawPacket = wire_options().deserialize(data).map_err(|err| PacketError::Malformed {
            description: format!("failed to deserialize packet: {}", err),
        })?;

        Self::from_raw(&raw)
    }
}

fn wire_options() -> impl Options {
    bincode::DefaultOptions::new()
        .with_fixint_encoding()
        .with_big_endian()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_draw_point_round_trip() {
        let raw = RawPacket {
            opcode: 1,
            fields: [150, 200, 0xFF0000FFu32 as i32, 2],
        };
        let packet = Packet::from_raw(&raw).expect("failed to interpret raw packet");

        assert_eq!(packet, Packet::DrawPoint { x: 150, y: 200, color: Pixel::red(), radius: 2 });

        let decoded = Packet::decode(&packet.encode().expect("failed to encode"))
            .expect("failed to decode");
        assert_eq!(decoded, packet);
        assert_eq!(decoded.to_raw(), raw);
    }

    #[test]
    fn test_wire_layout() {
        let encoded = Packet::Fill { color: Pixel::from_rgba(1, 2, 3, 4) }.encode()
            .expect("failed to encode");

        assert_eq!(encoded, vec![
            0, 0, 0, 5,
            0, 0, 0, 0,
            0, 0, 0, 0,
            1, 2, 3, 4,
            0, 0, 0, 0,
        ]);
    }

    #[test]
    fn test_every_opcode_survives_encoding() {
        let packets = [
            Packet::Handshake,
            Packet::draw_point(Coordinate::new(-3, 849), Pixel::from_rgba(9, 8, 7, 6), 5),
            Packet::EndStroke,
            Packet::Undo,
            Packet::Redo,
            Packet::Fill { color: Pixel::white() },
            Packet::Quit,
        ];

        for (opcode, packet) in packets.iter().enumerate() {
            assert_eq!(packet.opcode(), opcode as i32);
            let encoded = packet.encode().expect("failed to encode");
            assert_eq!(encoded.len(), PACKET_SIZE);
            assert_eq!(Packet::decode(&encoded).expect("failed to decode"), *packet);
        }
    }

    #[test]
    fn test_unknown_opcode() {
        let raw = RawPacket { opcode: 7, fields: [0; 4] };

        match Packet::from_raw(&raw) {
            Err(PacketError::UnknownOpcode { opcode }) => assert_eq!(opcode, 7),
            other => panic!("expected unknown opcode error, got {:?}", other),
        }
    }

    #[test]
    fn test_wrong_length_is_malformed() {
        let mut encoded = Packet::Undo.encode().expect("failed to encode");
        encoded.push(0);

        assert!(Packet::decode(&encoded).is_err());
        assert!(Packet::decode(&encoded[..12]).is_err());
        assert!(Packet::decode(&[]).is_err());
    }

    #[test]
    fn test_unused_fields_are_ignored() {
        let raw = RawPacket { opcode: 3, fields: [1, 2, 3, 4] };

        assert_eq!(Packet::from_raw(&raw).expect("failed to interpret"), Packet::Undo);
    }
}
