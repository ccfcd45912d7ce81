#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Currency {
    USD,
    EUR,
}
