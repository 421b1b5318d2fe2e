/// Generate the eight JOIN convenience methods for a builder that provides
/// `join_with(JoinKind, &str)`.
///
/// Usage (inside an `impl` block):
/// ```ignore
/// impl_join_methods!(mutable);   // fn join(&mut self, ..) -> &mut Self
/// impl_join_methods!(snapshot);  // fn join(&self, ..) -> Self
/// ```
macro_rules! impl_join_methods {
    ($mode:ident) => {
        impl_join_methods!(@method $mode, join, Join, "Add `JOIN <target>`.");
        impl_join_methods!(@method $mode, join_fetch, JoinFetch, "Add `JOIN FETCH <target>`.");
        impl_join_methods!(@method $mode, inner_join, Inner, "Add `INNER JOIN <target>`.");
        impl_join_methods!(
            @method $mode, inner_join_fetch, InnerFetch, "Add `INNER JOIN FETCH <target>`."
        );
        impl_join_methods!(@method $mode, left_join, Left, "Add `LEFT JOIN <target>`.");
        impl_join_methods!(
            @method $mode, left_join_fetch, LeftFetch, "Add `LEFT JOIN FETCH <target>`."
        );
        impl_join_methods!(
            @method $mode, left_outer_join, LeftOuter, "Add `LEFT OUTER JOIN <target>`."
        );
        impl_join_methods!(
            @method $mode, left_outer_join_fetch, LeftOuterFetch,
            "Add `LEFT OUTER JOIN FETCH <target>`."
        );
    };
    (@method mutable, $name:ident, $kind:ident, $doc:literal) => {
        #[doc = $doc]
        pub fn $name(&mut self, target: &str) -> &mut Self {
            self.join_with($crate::qb::JoinKind::$kind, target)
        }
    };
    (@method snapshot, $name:ident, $kind:ident, $doc:literal) => {
        #[doc = $doc]
        pub fn $name(&self, target: &str) -> Self {
            self.join_with($crate::qb::JoinKind::$kind, target)
        }
    };
}
