// src/noyau/jetons.rs

/// Jeton élémentaire d'une expression.
///
/// Découpage :
/// - `+`, `*` et chaque caractère blanc sont des jetons d'UN caractère
/// - tout le reste forme des suites maximales, traitées comme littéraux
///   numériques (signe éventuel collé aux chiffres, ex: "-45")
///
/// Les blancs ne portent aucune sémantique mais comptent dans la position
/// (1-based) rapportée par les erreurs : c'est la position que l'appelant
/// retrouverait en comptant les jetons lui-même.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Jeton<'a> {
    Blanc,
    Plus,
    Fois,
    Litteral(&'a str),
}

/// Découpe un fragment en jetons.
///
/// Aucune validation ici : la grammaire et le parsing des littéraux restent
/// du ressort de la calculatrice (un littéral imparsable doit être signalé
/// avec SA position, que seule la calculatrice connaît en multi-fragments).
///
/// Exemple:
///   "34 *-45" -> [Litteral("34"), Blanc, Fois, Litteral("-45")]
pub fn decouper(fragment: &str) -> Vec<Jeton<'_>> {
    let mut jetons = Vec::new();
    let mut reste = fragment;

    while let Some(c) = reste.chars().next() {
        if c.is_whitespace() {
            jetons.push(Jeton::Blanc);
            reste = &reste[c.len_utf8()..];
            continue;
        }

        match c {
            '+' => {
                jetons.push(Jeton::Plus);
                reste = &reste[1..];
            }
            '*' => {
                jetons.push(Jeton::Fois);
                reste = &reste[1..];
            }
            _ => {
                // suite maximale hors délimiteurs => littéral numérique
                let fin = reste
                    .char_indices()
                    .find(|&(_, c)| c.is_whitespace() || c == '+' || c == '*')
                    .map(|(i, _)| i)
                    .unwrap_or(reste.len());
                jetons.push(Jeton::Litteral(&reste[..fin]));
                reste = &reste[fin..];
            }
        }
    }

    jetons
}
