/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use crate::ConceptAPI;

pub mod attribute;
pub mod thing_manager;

/// Instances of thing types. Attributes are the only instances held by this crate.
pub trait ThingAPI: ConceptAPI {}
