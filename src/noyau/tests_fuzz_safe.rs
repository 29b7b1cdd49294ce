//! Tests fuzz safe : robustesse + déterminisme + limites contrôlées.
//!
//! But : marteler la machine sans brûler la machine.
//! - RNG déterministe (seed fixe)
//! - longueur de chaîne bornée
//! - budget temps global
//! - oracle : évaluation naïve en BigInt pur (aucun chemin rapide)
//! - invariant clé : chemin rapide + replis == BigInt naïf, toujours

use std::time::{Duration, Instant};

use num_bigint::BigInt;

use super::eval::{calculer, Calculatrice};

/* ------------------------ RNG déterministe minimal ------------------------ */

#[derive(Clone)]
struct Rng {
    state: u64,
}
impl Rng {
    fn new(seed: u64) -> Self {
        Self { state: seed }
    }
    fn next_u32(&mut self) -> u32 {
        // LCG simple (déterministe)
        self.state = self.state.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.state >> 32) as u32
    }
    fn pick(&mut self, n: u32) -> u32 {
        if n == 0 {
            0
        } else {
            self.next_u32() % n
        }
    }
    fn coin(&mut self) -> bool {
        (self.next_u32() & 1) == 1
    }
}

/* ------------------------ Budget anti-gel ------------------------ */

fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {:?}", max);
    }
}

/* ------------------------ Génération de chaînes valides ------------------------ */

/// Opérandes volontairement biaisés vers les bornes i32 : c'est là que le
/// repli tampon -> précis se joue.
fn gen_nombre(rng: &mut Rng) -> i32 {
    match rng.pick(10) {
        0 => 0,
        1 => 1,
        2 => -1,
        3 => i32::MAX,
        4 => i32::MIN,
        5 => i32::MAX - 1,
        6 => i32::MIN + 1,
        7 => 2_000_000_000,
        8 => -2_000_000_000,
        _ => rng.next_u32() as i32,
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Op {
    Plus,
    Fois,
}

fn gen_chaine(rng: &mut Rng) -> (Vec<i32>, Vec<Op>) {
    let longueur = 1 + rng.pick(12) as usize;

    let mut nombres = Vec::with_capacity(longueur);
    let mut ops = Vec::with_capacity(longueur.saturating_sub(1));

    nombres.push(gen_nombre(rng));
    for _ in 1..longueur {
        ops.push(if rng.coin() { Op::Plus } else { Op::Fois });
        nombres.push(gen_nombre(rng));
    }

    (nombres, ops)
}

/// Texte de l'expression, avec un saupoudrage de blancs (0 à 2 de chaque
/// côté des opérateurs) : le découpage doit y être insensible.
fn formater(rng: &mut Rng, nombres: &[i32], ops: &[Op]) -> String {
    fn blancs(rng: &mut Rng) -> &'static str {
        match rng.pick(3) {
            0 => "",
            1 => " ",
            _ => "  ",
        }
    }

    let mut texte = String::new();
    texte.push_str(&nombres[0].to_string());
    for (op, n) in ops.iter().zip(&nombres[1..]) {
        texte.push_str(blancs(rng));
        texte.push(match op {
            Op::Plus => '+',
            Op::Fois => '*',
        });
        texte.push_str(blancs(rng));
        texte.push_str(&n.to_string());
    }
    texte
}

/* ------------------------ Oracle naïf ------------------------ */

/// Évaluation de référence, 100 % BigInt : somme de chaînes de produits,
/// gauche à droite, sans aucun tampon.
fn modele(nombres: &[i32], ops: &[Op]) -> BigInt {
    let mut somme = BigInt::from(0);
    let mut produit = BigInt::from(nombres[0]);

    for (op, n) in ops.iter().zip(&nombres[1..]) {
        match op {
            Op::Plus => {
                somme += produit;
                produit = BigInt::from(*n);
            }
            Op::Fois => {
                produit *= *n;
            }
        }
    }

    somme + produit
}

/* ------------------------ Fuzz ------------------------ */

#[test]
fn fuzz_chaines_valides_contre_modele() {
    let mut rng = Rng::new(0xCA1C_0001);
    let start = Instant::now();
    let max = Duration::from_secs(10);

    for _ in 0..2_000 {
        budget(start, max);

        let (nombres, ops) = gen_chaine(&mut rng);
        let texte = formater(&mut rng, &nombres, &ops);

        let obtenu = calculer(&texte)
            .unwrap_or_else(|e| panic!("chaîne valide rejetée: {texte:?} -> {e}"));
        let attendu = modele(&nombres, &ops);

        assert_eq!(obtenu, attendu, "divergence sur {texte:?}");
    }
}

#[test]
fn fuzz_decoupe_en_fragments_arbitraires() {
    // Même chaîne, coupée n'importe où SUR UN BLANC : même résultat.
    let mut rng = Rng::new(0xCA1C_0002);
    let start = Instant::now();
    let max = Duration::from_secs(10);

    for _ in 0..500 {
        budget(start, max);

        let (nombres, ops) = gen_chaine(&mut rng);
        // blancs garantis autour des opérateurs pour couper proprement
        let mut texte = String::new();
        texte.push_str(&nombres[0].to_string());
        for (op, n) in ops.iter().zip(&nombres[1..]) {
            texte.push(' ');
            texte.push(match op {
                Op::Plus => '+',
                Op::Fois => '*',
            });
            texte.push(' ');
            texte.push_str(&n.to_string());
        }

        // coupe sur un blanc choisi au hasard
        let positions: Vec<usize> = texte
            .char_indices()
            .filter(|&(_, c)| c == ' ')
            .map(|(i, _)| i)
            .collect();

        let attendu = modele(&nombres, &ops);

        let mut calc = Calculatrice::new();
        if positions.is_empty() {
            calc.evaluer(&texte).unwrap();
        } else {
            let coupe = positions[rng.pick(positions.len() as u32) as usize];
            calc.evaluer(&texte[..coupe]).unwrap();
            calc.evaluer(&texte[coupe..]).unwrap();
        }

        assert_eq!(
            calc.finaliser().unwrap(),
            attendu,
            "divergence multi-fragments sur {texte:?}"
        );
    }
}

#[test]
fn fuzz_erreurs_deterministes() {
    // Chaîne valide mutilée (opérateur final) : l'erreur doit être stable
    // d'une évaluation à l'autre, position comprise.
    let mut rng = Rng::new(0xCA1C_0003);
    let start = Instant::now();
    let max = Duration::from_secs(10);

    for _ in 0..500 {
        budget(start, max);

        let (nombres, ops) = gen_chaine(&mut rng);
        let mut texte = formater(&mut rng, &nombres, &ops);
        texte.push_str(if rng.coin() { " +" } else { " *" });

        let premiere = calculer(&texte).unwrap_err();
        let seconde = calculer(&texte).unwrap_err();
        assert_eq!(premiere, seconde, "erreur instable sur {texte:?}");
    }
}
