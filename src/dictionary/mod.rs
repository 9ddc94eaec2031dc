/*!
 * Translation tables.
 *
 * - `table`: In-memory tables and the `source = target` file format
 * - `consistency`: Forward/reverse symmetry check
 * - `updater`: Adding oracle-proposed entries to a table pair
 */

pub use self::consistency::check_consistency;
pub use self::table::{append_entry, TablePair, TranslationTable};
pub use self::updater::{NewEntry, TableUpdater, UpdateReport};

pub mod consistency;
pub mod table;
pub mod updater;
