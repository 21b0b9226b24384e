// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! `RESULT`: the success response to `QUERY`/`PREPARE`/`EXECUTE`/`BATCH`.

pub mod column_spec;
pub mod metadata;
pub mod result;
pub mod rows;

pub use column_spec::ColumnSpec;
pub use metadata::{PreparedMetadata, RowsMetadata};
pub use result::{Prepared, ResultBody};
pub use rows::{Row, Rows};
