use hilbert_check::*;

fn check(input: &str) -> Report {
    ProofChecker::new().check_str(input).unwrap()
}

fn formula(s: &str) -> Formula {
    ast::parse_formula(None, 1, s).unwrap()
}

/// Re-checks every printed line against the axioms, the hypotheses and the
/// lines printed before it.
fn assert_sound(report: &Report) {
    let heading = ast::parse_heading(None, &report.heading).unwrap();
    let lines = report.lines();
    for (i, line) in lines.iter().enumerate() {
        assert_eq!(line.number, i + 1);
        match line.citation {
            Citation::Axiom(n) => {
                assert_eq!(axioms::match_axiom(&line.formula), Some(n), "{line}")
            }
            Citation::Hypothesis(n) => assert_eq!(heading.hypotheses[n - 1], line.formula),
            Citation::ModusPonens {
                implication,
                antecedent,
            } => {
                assert!(implication < line.number, "{line}");
                assert!(antecedent < line.number, "{line}");
                let implication = &lines[implication - 1].formula;
                let antecedent = &lines[antecedent - 1].formula;
                assert_eq!(implication.antecedent(), Some(antecedent), "{line}");
                assert_eq!(implication.consequent(), Some(&line.formula), "{line}");
            }
        }
    }
    assert_eq!(lines.last().map(|l| &l.formula), Some(&heading.theorem));
}

/// Every printed line except the last is cited by a later one.
fn assert_minimal(report: &Report) {
    let lines = report.lines();
    for line in &lines[..lines.len() - 1] {
        let cited = lines.iter().any(|l| {
            matches!(l.citation, Citation::ModusPonens { implication, antecedent }
                if implication == line.number || antecedent == line.number)
        });
        assert!(cited, "{line} is never cited");
    }
}

#[test]
fn axiom_only() {
    let report = check("|-A->B->A\nA->B->A\n");
    assert!(report.is_correct());
    assert_eq!(report.lines().len(), 1);
    assert_eq!(report.lines()[0].citation, Citation::Axiom(1));
    assert_eq!(report.to_string(), "|-A->B->A\n[1. Ax. sch. 1] (A -> (B -> A))");
}

#[test]
fn identity_is_not_an_axiom() {
    assert!(!check("|-A->A\nA->A\n").is_correct());
}

#[test]
fn hypothesis() {
    let report = check("A|-A\nA\n");
    assert!(report.is_correct());
    assert_eq!(report.lines()[0].citation, Citation::Hypothesis(1));
    assert_eq!(report.to_string(), "A|-A\n[1. Hypothesis 1] A");
}

#[test]
fn modus_ponens() {
    let report = check("A,A->B|-B\nA\nA->B\nB\n");
    assert!(report.is_correct());
    assert_eq!(
        report.to_string(),
        "A,A->B|-B\n[1. Hypothesis 1] A\n[2. Hypothesis 2] (A -> B)\n[3. M.P. 2, 1] B"
    );
    assert_sound(&report);
}

#[test]
fn unjustified_step() {
    let report = check("|-A\nB\n");
    assert_eq!(report.outcome, Outcome::Incorrect);
    assert_eq!(report.to_string(), "Proof is incorrect");
}

#[test]
fn unused_lemma_is_dropped() {
    let input = "\
A,A->B,C,C->D|-B
C
C->D
D
A
A->B
B
";
    let report = check(input);
    assert!(report.is_correct());
    assert_eq!(
        report.to_string(),
        "A,A->B,C,C->D|-B\n[1. Hypothesis 1] A\n[2. Hypothesis 2] (A -> B)\n[3. M.P. 2, 1] B"
    );
    assert_sound(&report);
    assert_minimal(&report);
}

#[test]
fn restated_formula_is_printed_once() {
    let once = check("A,A->B|-B\nA\nA->B\nB\n");
    let twice = check("A,A->B|-B\nA\nA->B\nA\nB\n");
    assert!(twice.is_correct());
    assert_eq!(once.lines(), twice.lines());
}

#[test]
fn theorem_must_be_the_last_line() {
    assert!(!check("A,A->B|-B\nA\nA->B\nB\nA\n").is_correct());
    let report = check("A,A->B|-B\nA\nA->B\nB\nA\nB\n");
    assert!(report.is_correct());
    assert_eq!(report.lines().len(), 3);
}

#[test]
fn identity_from_the_axioms() {
    let input = "\
|-A->A
A->A->A
(A->A->A)->(A->(A->A)->A)->(A->A)
(A->(A->A)->A)->(A->A)
A->(A->A)->A
A->A
";
    let report = check(input);
    assert!(report.is_correct());
    assert_eq!(
        report.to_string(),
        "\
|-A->A
[1. Ax. sch. 1] (A -> (A -> A))
[2. Ax. sch. 2] ((A -> (A -> A)) -> ((A -> ((A -> A) -> A)) -> (A -> A)))
[3. M.P. 2, 1] ((A -> ((A -> A) -> A)) -> (A -> A))
[4. Ax. sch. 1] (A -> ((A -> A) -> A))
[5. M.P. 3, 4] (A -> A)"
    );
    assert_sound(&report);
    assert_minimal(&report);
}

#[test]
fn reductio_drops_unused_axiom() {
    // A->B->A is a valid but unused step.
    let input = "\
A->B,A->!B|-!A
A->B
A->!B
A->B->A
(A->B)->(A->!B)->!A
(A->!B)->!A
!A
";
    let report = check(input);
    assert!(report.is_correct());
    assert_eq!(
        report.to_string(),
        "\
A->B,A->!B|-!A
[1. Hypothesis 1] (A -> B)
[2. Hypothesis 2] (A -> !B)
[3. Ax. sch. 9] ((A -> B) -> ((A -> !B) -> !A))
[4. M.P. 3, 1] ((A -> !B) -> !A)
[5. M.P. 4, 2] !A"
    );
    assert_sound(&report);
    assert_minimal(&report);
}

#[test]
fn renumbered_citations_point_backwards() {
    let input = "\
P,P->Q,Q->R,S|-R
S
P->Q
S->P->S
P
Q
P->S
Q->R
R
";
    let report = check(input);
    assert!(report.is_correct());
    assert_sound(&report);
    assert_minimal(&report);
    assert_eq!(report.lines().len(), 5);
    assert_eq!(
        report.lines()[4],
        ProofLine {
            number: 5,
            citation: Citation::ModusPonens {
                implication: 4,
                antecedent: 3,
            },
            formula: formula("R"),
        }
    );
}

#[test]
fn checker_is_reusable() {
    let checker = ProofChecker::new();
    assert!(checker.check_str("A|-A\nA\n").unwrap().is_correct());
    assert!(!checker.check_str("|-A\nA\n").unwrap().is_correct());
    assert!(checker.check_str("A|-A\nA\n").unwrap().is_correct());
}
