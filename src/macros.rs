// Shorthand for declaring axioms in tests

macro_rules! axioms {
    () => {
        Vec::<$crate::rewriting::axiom::Axiom>::new()
    };
    ($name:literal : $lhs:literal = $rhs:literal $(, $($rest:tt)*)? ) => {{
        let mut v = Vec::new();
        v.push($crate::rewriting::axiom::Axiom::from_strings($name, $lhs, $rhs).unwrap());
        $( v.extend(axioms!($($rest)*)); )?
        v
    }};
}

pub(crate) use axioms;
