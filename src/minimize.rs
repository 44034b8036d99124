use crate::proof_state::{Justification, ProofState};

impl ProofState {
    /// Drops the logged steps that the final step does not depend on.
    ///
    /// Walks the log backwards. A Modus Ponens step that nothing uses gives
    /// back the credit it put on its two premises. A step is only ever cited
    /// by later steps, so by the time the walk reaches a step every step that
    /// could release it has been visited, and one pass is enough. Returns the
    /// number of steps left with a non-zero use count.
    pub fn minimize(&mut self) -> usize {
        for i in (0..self.log.len()).rev() {
            let evidence = &self.records[self.log[i].0];
            if evidence.uses != 0 {
                continue;
            }
            let Justification::ModusPonens {
                antecedent,
                implication,
            } = &evidence.justification
            else {
                continue;
            };
            let premises = [self.by_formula[antecedent], self.by_formula[implication]];
            for premise in premises {
                let premise = &mut self.records[premise.0];
                debug_assert!(premise.uses > 0, "released a premise that was never credited");
                premise.uses -= 1;
            }
        }
        let kept = self.logged().filter(|e| e.uses > 0).count();
        log::debug!("kept {kept} of {} logged steps", self.log.len());
        kept
    }
}
