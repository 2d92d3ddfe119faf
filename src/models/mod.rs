pub mod current_user;
pub mod layout_state;
pub mod table_query;
pub mod user_record;

pub use current_user::CurrentUser;
pub use layout_state::{LayoutState, Overlay};
pub use table_query::{RoleFilter, SortColumn, SortDirection, SortSpec, TableQuery};
pub use user_record::{Role, UserRecord};
