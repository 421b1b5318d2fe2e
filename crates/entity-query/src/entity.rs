//! Entity naming for the type-based constructors.
//!
//! `QueryBuilder::of::<T>()` builds `FROM <T's name> <alias>`. The name comes
//! from [`Entity::entity_name`], which defaults to the simple Rust type name.
//!
//! ```
//! # #[cfg(feature = "derive")] {
//! use entity_query::{Entity, QueryBuilder};
//!
//! #[derive(Entity)]
//! #[entity(name = "Customer", alias = "c")]
//! struct CustomerRow;
//!
//! let qb = QueryBuilder::of::<CustomerRow>();
//! assert_eq!(qb.to_query(), "SELECT c FROM Customer c");
//! # }
//! ```
//!
//! Without the derive, implement the trait by hand:
//!
//! ```
//! use entity_query::{Entity, QueryBuilder};
//!
//! struct Invoice;
//!
//! impl Entity for Invoice {}
//!
//! assert_eq!(QueryBuilder::of::<Invoice>().to_query(), "SELECT e FROM Invoice e");
//! ```

/// A type that can be queried by name.
pub trait Entity {
    /// The entity name used in the FROM clause.
    fn entity_name() -> &'static str
    where
        Self: Sized,
    {
        simple_type_name::<Self>()
    }

    /// Alias override. `None` uses the builder's configured default alias.
    fn default_alias() -> Option<&'static str>
    where
        Self: Sized,
    {
        None
    }
}

/// The last path segment of a type's name, without generic arguments.
///
/// `my_app::model::Order<u8>` becomes `Order`.
pub fn simple_type_name<T: ?Sized>() -> &'static str {
    let full = std::any::type_name::<T>();
    let base = full.split('<').next().unwrap_or(full);
    base.rsplit("::").next().unwrap_or(base)
}

#[cfg(test)]
mod tests {
    use super::*;

    mod model {
        pub struct Order<T>(pub T);
        pub struct Invoice;
    }

    impl Entity for model::Invoice {}

    #[test]
    fn strips_path_and_generics() {
        assert_eq!(simple_type_name::<model::Order<u8>>(), "Order");
        assert_eq!(simple_type_name::<String>(), "String");
    }

    #[test]
    fn default_entity_name_is_simple_type_name() {
        assert_eq!(model::Invoice::entity_name(), "Invoice");
        assert_eq!(model::Invoice::default_alias(), None);
    }
}
