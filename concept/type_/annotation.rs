/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use encoding::{
    error::EncodingError,
    graph::type_::property::{TypeEdgePropertyEncoding, TypeVertexPropertyEncoding},
    layout::infix::Infix,
};

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Annotation {
    Abstract(AnnotationAbstract),
    Key(AnnotationKey),
}

#[derive(Debug, Default, Copy, Clone, Eq, PartialEq, Hash)]
pub struct AnnotationAbstract;

#[derive(Debug, Default, Copy, Clone, Eq, PartialEq, Hash)]
pub struct AnnotationKey;

impl From<AnnotationAbstract> for Annotation {
    fn from(annotation: AnnotationAbstract) -> Self {
        Annotation::Abstract(annotation)
    }
}

impl From<AnnotationKey> for Annotation {
    fn from(annotation: AnnotationKey) -> Self {
        Annotation::Key(annotation)
    }
}

impl TypeVertexPropertyEncoding for AnnotationAbstract {
    const INFIX: Infix = Infix::PropertyAnnotationAbstract;

    fn from_value_bytes(_value: &[u8]) -> Result<Self, EncodingError> {
        Ok(AnnotationAbstract)
    }

    fn to_value_bytes(&self) -> Option<Box<[u8]>> {
        None
    }
}

impl TypeEdgePropertyEncoding for AnnotationKey {
    const INFIX: Infix = Infix::PropertyAnnotationKey;

    fn from_value_bytes(_value: &[u8]) -> Result<Self, EncodingError> {
        Ok(AnnotationKey)
    }

    fn to_value_bytes(&self) -> Option<Box<[u8]>> {
        None
    }
}
