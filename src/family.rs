//! Closed type families for type-directed lookup.
//!
//! A [`PolyList`] stores elements of a single base type `T`, but callers
//! frequently want to find an element by its *concrete* type: "give me the
//! first `Transform` component in this entity's component list". Rather than
//! relying on open-ended runtime type identification, `polylist` describes
//! the set of concrete types that may be stored in a list as a closed
//! *family*:
//!
//! - The base type implements [`Family`], which reports a cheap, copyable
//!   [discriminant](Family::Kind) for each element.
//! - Each concrete type that may be looked up implements [`Variant`] for that
//!   family, which says which discriminants it corresponds to and how to
//!   downcast a base-typed reference into a reference to the concrete type.
//!
//! Most families are enums, and the [`family!`] macro generates all of the
//! above from an enum definition. Families of trait objects can implement the
//! traits by hand, typically by having the trait expose `as_*` accessor
//! methods for each capability.
//!
//! [`PolyList`]: crate::PolyList
//! [`family!`]: crate::family!
use core::fmt;

/// A closed family of element types which may be stored in a
/// [`PolyList`](crate::PolyList) and searched by type.
pub trait Family {
    /// The discriminant identifying which member of the family an element is.
    type Kind: Copy + Eq + fmt::Debug;

    /// Returns the discriminant of this element.
    fn kind(&self) -> Self::Kind;
}

/// A type which may be found in a [`PolyList`](crate::PolyList) of family `F`
/// by [type-directed lookup](crate::PolyList::find_by_type).
///
/// A `Variant` may correspond to more than one [`Family::Kind`]. For example,
/// a trait object type describing a capability shared by several members of
/// the family matches every kind that has that capability.
pub trait Variant<F: Family + ?Sized> {
    /// Returns `true` if elements of the given kind can be downcast to `Self`.
    fn matches(kind: F::Kind) -> bool;

    /// Downcasts a reference to a family element into a reference to `Self`.
    ///
    /// Returns `None` if the element is not a `Self`.
    fn downcast_ref(elem: &F) -> Option<&Self>;

    /// Downcasts a mutable reference to a family element into a mutable
    /// reference to `Self`.
    ///
    /// Returns `None` if the element is not a `Self`.
    fn downcast_mut(elem: &mut F) -> Option<&mut Self>;

    /// Returns `true` if `elem` is a `Self`.
    #[inline]
    fn is(elem: &F) -> bool {
        Self::matches(elem.kind())
    }
}

/// Defines an enum as a closed [`Family`] of element types.
///
/// Each variant of the enum must be a tuple variant with exactly one field,
/// and each variant's field type must be distinct. The macro generates:
///
/// - the enum itself,
/// - a fieldless "kind" enum with one variant per family member, named by the
///   identifier after the `:`,
/// - an implementation of [`Family`] for the enum,
/// - an implementation of [`Variant`] for each field type,
/// - [`From`] conversions from each field type into the enum and into a
///   [`Box`] of the enum, so that values can be passed directly to
///   [`PolyList::push_tail`](crate::PolyList::push_tail) with `.into()`.
///
/// # Examples
///
/// ```
/// use polylist::{family, PolyList};
///
/// #[derive(Debug, PartialEq)]
/// pub struct Transform { x: f32, y: f32 }
///
/// #[derive(Debug, PartialEq)]
/// pub struct Sprite { name: &'static str }
///
/// family! {
///     #[derive(Debug)]
///     pub enum Component: ComponentKind {
///         Transform(Transform),
///         Sprite(Sprite),
///     }
/// }
///
/// let mut components = PolyList::<Component>::new();
/// components.push_tail(Sprite { name: "player" }.into());
/// components.push_tail(Transform { x: 1.0, y: 2.0 }.into());
///
/// assert_eq!(
///     components.find_by_type::<Transform>(),
///     Some(&Transform { x: 1.0, y: 2.0 }),
/// );
/// ```
///
/// [`Box`]: alloc::boxed::Box
#[macro_export]
macro_rules! family {
    (
        $(#[$meta:meta])*
        $vis:vis enum $Family:ident : $Kind:ident {
            $(
                $(#[$vmeta:meta])*
                $Variant:ident($Ty:ty)
            ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        $vis enum $Family {
            $(
                $(#[$vmeta])*
                $Variant($Ty),
            )+
        }

        #[doc = concat!("The kind of a [`", stringify!($Family), "`] element.")]
        #[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
        $vis enum $Kind {
            $(
                #[allow(missing_docs)]
                $Variant,
            )+
        }

        impl $crate::Family for $Family {
            type Kind = $Kind;

            #[inline]
            fn kind(&self) -> $Kind {
                match self {
                    $( $Family::$Variant(_) => $Kind::$Variant, )+
                }
            }
        }

        $(
            impl $crate::Variant<$Family> for $Ty {
                #[inline]
                fn matches(kind: $Kind) -> bool {
                    kind == $Kind::$Variant
                }

                #[inline]
                #[allow(unreachable_patterns)]
                fn downcast_ref(elem: &$Family) -> ::core::option::Option<&Self> {
                    match elem {
                        $Family::$Variant(value) => ::core::option::Option::Some(value),
                        _ => ::core::option::Option::None,
                    }
                }

                #[inline]
                #[allow(unreachable_patterns)]
                fn downcast_mut(elem: &mut $Family) -> ::core::option::Option<&mut Self> {
                    match elem {
                        $Family::$Variant(value) => ::core::option::Option::Some(value),
                        _ => ::core::option::Option::None,
                    }
                }
            }

            impl ::core::convert::From<$Ty> for $Family {
                #[inline]
                fn from(value: $Ty) -> Self {
                    $Family::$Variant(value)
                }
            }

            impl ::core::convert::From<$Ty> for $crate::__private::Box<$Family> {
                #[inline]
                fn from(value: $Ty) -> Self {
                    $crate::__private::Box::new($Family::$Variant(value))
                }
            }
        )+
    };
}
