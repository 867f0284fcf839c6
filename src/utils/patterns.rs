use super::{Pattern, PatternError};

/// A named entry of the built-in pattern list.
pub struct Form {
    pub name: &'static str,
    rle: &'static str,
}

impl Form {
    pub fn pattern(&self) -> Result<Pattern, PatternError> {
        Pattern::from_rle(self.rle)
    }
}

pub const FORMS: &[Form] = &[
    Form {
        name: "Glider",
        rle: "x = 3, y = 3\nbo$2bo$3o!",
    },
    Form {
        name: "Blinker",
        rle: "x = 3, y = 1\n3o!",
    },
    Form {
        name: "Toad",
        rle: "x = 4, y = 2\nb3o$3o!",
    },
    Form {
        name: "Beacon",
        rle: "x = 4, y = 4\n2o$2o$2b2o$2b2o!",
    },
    Form {
        name: "Pulsar",
        rle: "x = 13, y = 13\n\
              2b3o3b3o2b2$o4bobo4bo$o4bobo4bo$o4bobo4bo$2b3o3b3o2b2$\
              2b3o3b3o2b$o4bobo4bo$o4bobo4bo$o4bobo4bo2$2b3o3b3o!",
    },
    Form {
        name: "Lightweight spaceship",
        rle: "x = 5, y = 4\nbo2bo$o4b$o3bo$4o!",
    },
    Form {
        name: "R-pentomino",
        rle: "x = 3, y = 3\nb2o$2o$bo!",
    },
    Form {
        name: "Diehard",
        rle: "x = 8, y = 3\n6bo$2o$bo3b3o!",
    },
    Form {
        name: "Acorn",
        rle: "x = 7, y = 3\nbo$3bo$2o2b3o!",
    },
    Form {
        name: "Gosper glider gun",
        rle: "x = 36, y = 9\n\
              24bo$22bobo$12b2o6b2o12b2o$11bo3bo4b2o12b2o$\
              2o8bo5bo3b2o$2o8bo3bob2o4bobo$10bo5bo7bo$11bo3bo$12b2o!",
    },
];

pub fn find_form(name: &str) -> Option<&'static Form> {
    FORMS
        .iter()
        .find(|form| form.name.eq_ignore_ascii_case(name))
}
