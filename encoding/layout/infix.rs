/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct InfixID {
    bytes: [u8; InfixID::LENGTH],
}

impl InfixID {
    pub const LENGTH: usize = 1;

    pub const fn new(bytes: [u8; InfixID::LENGTH]) -> Self {
        InfixID { bytes }
    }

    pub fn bytes(&self) -> [u8; InfixID::LENGTH] {
        self.bytes
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Infix {
    PropertyLabel,
    PropertyValueType,
    PropertyAnnotationAbstract,
    PropertyAnnotationKey,
    PropertyOverride,
}

macro_rules! infix_functions {
    ($(
        $name:ident => $bytes:tt
    );*) => {
        pub const fn infix_id(&self) -> InfixID {
            let bytes = match self {
                $(
                    Self::$name => {&$bytes}
                )*
            };
            InfixID::new(*bytes)
        }

        pub fn from_infix_id(infix_id: InfixID) -> Option<Self> {
            match infix_id.bytes() {
                $(
                    $bytes => Some(Self::$name),
                )*
                _ => None,
            }
       }
   };
}

impl Infix {
    infix_functions!(
        PropertyLabel => [0];
        PropertyValueType => [1];
        PropertyAnnotationAbstract => [20];
        PropertyAnnotationKey => [21];
        PropertyOverride => [40]
    );
}
