/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct PrefixID {
    pub(crate) byte: u8,
}

impl PrefixID {
    pub const LENGTH: usize = 1;

    pub const fn new(byte: u8) -> Self {
        PrefixID { byte }
    }

    pub const fn to_bytes(&self) -> [u8; PrefixID::LENGTH] {
        [self.byte]
    }
}

macro_rules! make_prefix_enum {
    ($($name:ident => $byte:literal = $hex:literal);*) => {
        // assert that $byte and $hex are the same literal
        $(const _: [(); $byte] = [(); $hex];)*

        #[derive(Copy, Clone, Debug, Hash, Eq, PartialEq, Ord, PartialOrd)]
        pub enum Prefix {
            $($name = $byte,)*
        }

        impl Prefix {
            pub const fn prefix_id(&self) -> PrefixID {
                match self {
                    $(Self::$name => PrefixID::new($byte),)*
                }
            }

            pub fn from_prefix_id(prefix: PrefixID) -> Option<Self> {
                match prefix.byte {
                    $($byte => Some(Self::$name),)*
                    _ => None,
                }
            }
        }
    };
}

make_prefix_enum! {
    // Reserved: 0-9 = 0x00-0x09
    VertexEntityType => 10 = 0x0A;
    VertexRelationType => 11 = 0x0B;
    VertexAttributeType => 12 = 0x0C;
    VertexRoleType => 15 = 0x0F;

    VertexAttribute => 32 = 0x20;

    EdgeSub => 100 = 0x64;
    EdgeSubReverse => 101 = 0x65;
    EdgeOwns => 102 = 0x66;
    EdgeOwnsReverse => 103 = 0x67;
    EdgePlays => 104 = 0x68;
    EdgePlaysReverse => 105 = 0x69;
    EdgeRelates => 106 = 0x6A;
    EdgeRelatesReverse => 107 = 0x6B;

    PropertyTypeVertex => 160 = 0xA0;
    PropertyTypeEdge => 162 = 0xA2;

    IndexLabelToType => 182 = 0xB6
    // Reserved: 200-255 = 0xC8-0xFF
}
