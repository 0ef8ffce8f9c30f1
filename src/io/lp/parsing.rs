//! # Parsing model files
//!
//! First stage of importing linear programs. Checks if the file is syntactically correct, but
//! doesn't do any consistency checks for e.g. the number of coefficients of each constraint.
use crate::data::linear_program::elements::{ConstraintType, Objective};
use crate::io::error::{FileLocation, ParseError};
use crate::io::lp::token::{COMMENT_INDICATOR, EQUAL, GREATER, LABEL_SEPARATOR, LESS, MAXIMIZE, MINIMIZE};

/// Most fundamental element in a model file.
///
/// Every part of the input string to end up in the final model is parsed as either a `Word` or a
/// `Number`.
#[derive(Clone, Debug, PartialEq)]
pub(super) enum Atom<'a> {
    Word(&'a str),
    Number(f64),
}

/// Convert a program in string form to lines of atoms.
///
/// Comments and empty lines are skipped.
///
/// # Arguments
///
/// * `program`: The input string.
///
/// # Return value
///
/// All lines stored in a `Vec`. The first `(u64, &str)` tuple is used for creating of errors, it
/// contains the line number and line.
pub(super) fn into_atom_lines(program: &str) -> Vec<(FileLocation, Vec<Atom>)> {
    program.lines()
        .enumerate()
        .map(|(number, line)| (number as u64 + 1, line))
        .map(|(number, line)| {
            let content = line.split(COMMENT_INDICATOR).next().unwrap_or("");
            ((number, line), content)
        })
        .filter(|(_, content)| !content.trim().is_empty())
        .map(|(location, content)| (location, into_atoms(content)))
        .collect()
}

/// Convert a line into `Atom`s by testing whether an atom is a number.
fn into_atoms(line: &str) -> Vec<Atom> {
    line.split_whitespace()
        .map(|atom| match atom.parse::<f64>() {
            Ok(value) => Atom::Number(value),
            Err(_) => Atom::Word(atom),
        })
        .collect()
}

/// A single constraint as read from a line.
///
/// The number of coefficients has not been checked against the number of variables.
#[derive(Debug, PartialEq)]
pub(super) struct UnstructuredConstraint<'a> {
    pub name: Option<&'a str>,
    pub coefficients: Vec<f64>,
    pub constraint_type: ConstraintType,
    pub rhs: f64,
    pub location: FileLocation<'a>,
}

/// Used to gather all data of the model in an intermediate parse phase.
///
/// # Note
///
/// The information contained in this struct is not necessarily consistent, e.g. a constraint
/// might have more coefficients than the objective function.
#[derive(Debug, PartialEq)]
pub(super) struct UnstructuredModel<'a> {
    pub sense: Objective,
    pub cost: Vec<f64>,
    pub constraints: Vec<UnstructuredConstraint<'a>>,
}

impl<'a> TryFrom<Vec<(FileLocation<'a>, Vec<Atom<'a>>)>> for UnstructuredModel<'a> {
    type Error = ParseError;

    /// The first line is the objective function, all other lines are constraints.
    fn try_from(atom_lines: Vec<(FileLocation<'a>, Vec<Atom<'a>>)>) -> Result<Self, Self::Error> {
        let mut lines = atom_lines.into_iter();

        let (location, atoms) = lines.next()
            .ok_or_else(|| ParseError::new("No objective function read."))?;
        let (sense, cost) = parse_objective(location, &atoms)
            .map_err(|error| ParseError::with_cause("Could not read the objective function.", error))?;

        let constraints = lines
            .enumerate()
            .map(|(i, (location, atoms))| {
                parse_constraint(location, &atoms).map_err(|error| {
                    ParseError::with_cause(format!("Could not read constraint {}.", i + 1), error)
                })
            })
            .collect::<Result<_, _>>()?;

        Ok(Self { sense, cost, constraints })
    }
}

/// Strip the label separator from a word, if it ends with one.
fn as_label(word: &str) -> Option<&str> {
    word.strip_suffix(LABEL_SEPARATOR)
}

/// Read the objective line: a direction followed by the cost coefficients.
fn parse_objective<'a>(location: FileLocation<'a>, atoms: &[Atom<'a>]) -> Result<(Objective, Vec<f64>), ParseError> {
    let (keyword, mut rest) = match atoms {
        [Atom::Word(word), rest @ ..] => (as_label(word).unwrap_or(*word), rest),
        _ => return Err(ParseError::with_file_location("Expected \"maximize\" or \"minimize\".", location)),
    };
    if let [Atom::Word(separator), remainder @ ..] = rest {
        if as_label(separator) == Some("") {
            rest = remainder;
        }
    }

    let lowercase = keyword.to_lowercase();
    let sense = if MAXIMIZE.contains(&lowercase.as_str()) {
        Objective::Maximize
    } else if MINIMIZE.contains(&lowercase.as_str()) {
        Objective::Minimize
    } else {
        return Err(ParseError::with_file_location(
            format!("Direction \"{}\" not recognised, expected \"maximize\" or \"minimize\".", keyword),
            location,
        ));
    };

    let cost = rest.iter()
        .map(|atom| match atom {
            Atom::Number(value) => Ok(*value),
            Atom::Word(word) => Err(ParseError::with_file_location(
                format!("Expected a coefficient, found \"{}\".", word),
                location,
            )),
        })
        .collect::<Result<Vec<_>, _>>()?;
    if cost.is_empty() {
        return Err(ParseError::with_file_location("No objective coefficients.", location));
    }

    Ok((sense, cost))
}

/// Read a constraint line: an optional label, coefficients, an operator and a right-hand side.
fn parse_constraint<'a>(location: FileLocation<'a>, atoms: &[Atom<'a>]) -> Result<UnstructuredConstraint<'a>, ParseError> {
    let (name, rest) = match atoms {
        [Atom::Word(word), rest @ ..] if as_label(word).is_some() => (as_label(*word), rest),
        _ => (None, atoms),
    };

    let mut coefficients = Vec::new();
    let mut atoms = rest.iter();
    let constraint_type = loop {
        match atoms.next() {
            Some(Atom::Number(value)) => coefficients.push(*value),
            Some(Atom::Word(word)) => break parse_operator(word).ok_or_else(|| ParseError::with_file_location(
                format!("Operator \"{}\" not recognised.", word),
                location,
            ))?,
            None => return Err(ParseError::with_file_location("No operator.", location)),
        }
    };

    let rhs = match (atoms.next(), atoms.next()) {
        (Some(Atom::Number(value)), None) => *value,
        (None, _) => return Err(ParseError::with_file_location("No right-hand side.", location)),
        _ => return Err(ParseError::with_file_location("Expected a single right-hand side value.", location)),
    };

    Ok(UnstructuredConstraint { name: name.filter(|name| !name.is_empty()), coefficients, constraint_type, rhs, location })
}

fn parse_operator(word: &str) -> Option<ConstraintType> {
    if LESS.contains(&word) {
        Some(ConstraintType::Less)
    } else if GREATER.contains(&word) {
        Some(ConstraintType::Greater)
    } else if EQUAL.contains(&word) {
        Some(ConstraintType::Equal)
    } else {
        None
    }
}
