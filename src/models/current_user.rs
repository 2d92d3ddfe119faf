/// Identity shown in the header's user menu.
#[derive(Clone, Debug)]
pub struct CurrentUser {
    pub name: String,
    pub email: String,
}
