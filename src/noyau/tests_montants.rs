//! Tests de campagne : propriétés du contrat `evaluate` + prédicats UI.
//!
//! Tables (entrée, attendu) plutôt qu’un test par cas : un échec affiche
//! l’expression fautive.

use num_bigint::BigInt;
use num_rational::BigRational;

use super::{
    contains_operators, evaluate, format_amount, is_plain_number, ErrorKind, MONTANT_MAX_CENTIMES,
};

fn eval_ok(expr: &str) -> String {
    evaluate(expr)
        .unwrap_or_else(|e| panic!("expr={expr:?} err={e}"))
        .to_string()
}

fn eval_kind(expr: &str) -> ErrorKind {
    match evaluate(expr) {
        Ok(m) => panic!("expr={expr:?} aurait dû échouer, a donné {m}"),
        Err(e) => e.kind(),
    }
}

fn assert_table_ok(table: &[(&str, &str)]) {
    for (expr, attendu) in table {
        assert_eq!(eval_ok(expr), *attendu, "expr={expr:?}");
    }
}

fn assert_table_kind(table: &[(&str, ErrorKind)]) {
    for (expr, attendu) in table {
        assert_eq!(eval_kind(expr), *attendu, "expr={expr:?}");
    }
}

/* ------------------------ Littéraux ------------------------ */

#[test]
fn litteraux_identite() {
    assert_table_ok(&[
        ("0", "0.00"),
        ("0.01", "0.01"),
        ("42", "42.00"),
        ("12.5", "12.50"),
        ("100.", "100.00"),
        (".5", "0.50"),
        ("1234.56", "1234.56"),
        ("999999999.99", "999999999.99"),
    ]);
}

#[test]
fn litteraux_balayage_centimes() {
    // n/100 pour un échantillon régulier : evaluate(n) == n exactement
    let mut c: i64 = 0;
    while c <= MONTANT_MAX_CENTIMES {
        let texte = format!("{}.{:02}", c / 100, c % 100);
        let m = evaluate(&texte).unwrap_or_else(|e| panic!("{texte:?}: {e}"));
        assert_eq!(m.centimes(), c, "{texte:?}");
        c = c * 7 + 13;
    }
}

/* ------------------------ Grammaire ------------------------ */

#[test]
fn precedence_et_parentheses() {
    assert_table_ok(&[
        ("50+40*2", "130.00"),
        ("100-80/2", "60.00"),
        ("(50+40)*2", "180.00"),
        ("100/(2+2)", "25.00"),
        ("(100+20)/4", "30.00"),
        ("2*(3+(4*(5-1)))", "38.00"),
        ("10-5-2", "3.00"),
        ("100/5/2", "10.00"),
    ]);
}

#[test]
fn unaires() {
    assert_table_ok(&[
        ("-50+100", "50.00"),
        ("50++50", "100.00"),
        ("50--50", "100.00"),
        ("--5", "5.00"),
        ("-+-5", "5.00"),
        ("+5", "5.00"),
        ("10*-2+30", "10.00"),
        ("-(10-30)", "20.00"),
    ]);
}

#[test]
fn blancs() {
    assert_table_ok(&[(" 50 + 40 * 2 ", "130.00"), ("\t(1 + 1)\t* 2", "4.00")]);
}

/* ------------------------ Arrondi ------------------------ */

#[test]
fn arrondi_demi_pair() {
    assert_table_ok(&[
        ("2.345", "2.34"),
        ("2.355", "2.36"),
        ("2.365", "2.36"),
        ("100/3", "33.33"),
        ("200/3", "66.67"),
        ("0.125", "0.12"),
        ("0.135", "0.14"),
        ("1/8", "0.12"),
        ("0.004", "0.00"),
    ]);
}

#[test]
fn calculs_exacts_sans_derive() {
    // 0.1 + 0.2 exact, pas d’artefact flottant
    assert_table_ok(&[("0.1+0.2", "0.30"), ("1.1*1.1", "1.21"), ("(1/3)*3", "1.00")]);
}

/* ------------------------ Validation ------------------------ */

#[test]
fn signe_et_borne() {
    assert_table_kind(&[
        ("50-100", ErrorKind::NegativeAmount),
        ("-0.01", ErrorKind::NegativeAmount),
        ("1000000001", ErrorKind::AmountTooLarge),
        ("999999999.995", ErrorKind::AmountTooLarge),
        ("999999999.99+0.01", ErrorKind::AmountTooLarge),
    ]);
    assert_table_ok(&[
        ("999999999.99", "999999999.99"),
        ("999999999.994", "999999999.99"),
        ("-0.004", "0.00"),
        ("1000000000000-999999999999", "1.00"),
    ]);
}

#[test]
fn entrees_malformees() {
    assert_table_kind(&[
        ("", ErrorKind::EmptyInput),
        ("   ", ErrorKind::EmptyInput),
        ("\t", ErrorKind::EmptyInput),
        ("100$50", ErrorKind::InvalidCharacter),
        ("1,000", ErrorKind::InvalidCharacter),
        ("abc", ErrorKind::InvalidCharacter),
        ("(50+50", ErrorKind::UnbalancedParenthesis),
        ("50+50)", ErrorKind::UnbalancedParenthesis),
        ("50+", ErrorKind::UnexpectedEnd),
        ("50*", ErrorKind::UnexpectedEnd),
        ("50 50", ErrorKind::UnexpectedToken),
        ("*50", ErrorKind::UnexpectedToken),
        ("100/0", ErrorKind::DivisionByZero),
        ("100/(5-5)", ErrorKind::DivisionByZero),
    ]);
}

/* ------------------------ Idempotence ------------------------ */

#[test]
fn reevaluation_stable() {
    for expr in ["50+40*2", "100/3", "2.355", "1/7", "999999999.99", "0", "(1+2)*333.333"] {
        let premier = evaluate(expr).unwrap_or_else(|e| panic!("{expr:?}: {e}"));

        // rendu non groupé
        let relu = evaluate(&premier.to_string()).unwrap();
        assert_eq!(relu, premier, "expr={expr:?}");

        // rendu groupé, séparateurs retirés
        let groupe = format_amount(&premier.as_rational()).replace(',', "");
        assert_eq!(evaluate(&groupe).unwrap(), premier, "expr={expr:?}");
    }
}

#[test]
fn format_amount_sous_mille_relu_tel_quel() {
    let v = BigRational::new(BigInt::from(99_999), BigInt::from(100));
    let texte = format_amount(&v);
    assert_eq!(texte, "999.99");
    assert_eq!(evaluate(&texte).unwrap().as_rational(), v);
}

/* ------------------------ Prédicats UI ------------------------ */

#[test]
fn nombre_simple_sans_operateur() {
    for s in ["0", "12", "12.5", "100.", ".5", " 7 ", "999999999.99"] {
        assert!(is_plain_number(s), "{s:?}");
        assert!(!contains_operators(s), "{s:?}");
    }
}

#[test]
fn operateur_binaire_detecte() {
    for s in ["50+50", "1-1", "2*3", "6/2", "(1)+(2)", "-50+100", "50++50", "1 / 0", "-(5)", "+(5)"] {
        assert!(contains_operators(s), "{s:?}");
        assert!(!is_plain_number(s), "{s:?}");
    }
}

#[test]
fn longues_chaines_refusees_sans_debordement() {
    for n in [4_000, 20_000] {
        let s = format!("{}1", "1+".repeat(n));
        assert_eq!(eval_kind(&s), ErrorKind::UnexpectedToken, "n={n}");
    }
    // juste sous la limite : évaluée normalement
    assert_eq!(eval_ok(&format!("{}1", "1+".repeat(500))), "501.00");
}
