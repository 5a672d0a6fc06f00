//! Think page content and its rotation state.
//!
//! Four cosmological structures are contemplated in turn. Each has a fixed
//! list of reflections; the reflection rotates on a short timer and the
//! structure on a longer one.

use serde::Serialize;

/// A cosmological scenario with its reflections.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CosmicStructure {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub reflections: &'static [&'static str],
}

pub static STRUCTURES: [CosmicStructure; 4] = [
    CosmicStructure {
        id: "finite-finite",
        title: "Finite Number of Finite Universes",
        description: "Bounded multiplicity, bounded extension",
        reflections: &[
            "If reality consists of a finite collection of finite universes, then totality itself is bounded. Each universe, being finite, contains only a limited arrangement of matter and energy.",
            "The paradox of finite totality: if everything that exists is contained within these finite universes, what defines the boundary? Is there truly \"nothing\" beyond, or does the concept of boundary itself become meaningless?",
            "In such a cosmos, uniqueness gains profound meaning. Every configuration of matter, every possible arrangement, every potential story has limits. Scarcity becomes the fundamental principle of existence.",
            "The meta-question emerges: what maintains the separation between these finite universes? Is there a medium, a void, or does each universe exist in complete isolation from others?",
        ],
    },
    CosmicStructure {
        id: "finite-infinite",
        title: "Finite Number of Infinite Universes",
        description: "Bounded multiplicity, unbounded extension",
        reflections: &[
            "A finite count of infinite universes presents a fascinating paradox. Each universe, being infinite, already contains unlimited space, matter, and possibility.",
            "How do finite infinities relate? If Universe A and Universe B are both infinite, do they intersect, run parallel, or exist in complete isolation? The topology of infinite separation becomes crucial.",
            "Within each infinite universe, every possible finite configuration exists infinitely many times. Yet across the finite collection of such universes, there might be fundamental differences in physical laws or mathematical structures.",
            "The observer paradox intensifies here: from within any infinite universe, the existence of other infinite universes becomes undetectable through direct observation, yet logically necessary.",
        ],
    },
    CosmicStructure {
        id: "infinite-finite",
        title: "Infinite Number of Finite Universes",
        description: "Unbounded multiplicity, bounded extension",
        reflections: &[
            "An infinite collection of finite universes suggests endless diversity within bounded containers. Each universe, though finite, represents a complete, self-contained reality.",
            "The principle of plenitude emerges: if there are infinitely many finite universes, then every possible finite configuration not only exists but exists infinitely many times across different universes.",
            "This structure raises questions about identity and uniqueness. If there are infinitely many universes identical to this one, what makes any particular instance special or meaningful?",
            "The combinatorial explosion becomes infinite: every possible arrangement of finite matter, every possible set of physical constants, every possible evolutionary pathway exists somewhere in this infinite multiverse.",
        ],
    },
    CosmicStructure {
        id: "infinite-infinite",
        title: "Infinite Number of Infinite Universes",
        description: "Unbounded multiplicity, unbounded extension",
        reflections: &[
            "The ultimate cosmological scenario - infinite infinities. Here, both the number of universes and the size of each universe stretch beyond all bounds.",
            "In such a cosmos, every conceivable infinite structure exists infinitely many times. Every possible infinite narrative, every infinite pattern of existence, every infinite mathematical object finds physical instantiation.",
            "The hierarchy of infinities becomes critical: are all these infinite universes of the same cardinality? Could some contain higher orders of infinity than others?",
            "This represents maximal reality - the most expansive possible cosmos where limitation exists only as a local, temporary phenomenon within infinite expanses of unlimited possibility.",
            "The philosophical implications are staggering: consciousness, meaning, and purpose must be reconsidered in a reality where everything infinite happens infinitely many times.",
        ],
    },
];

/// Position in the contemplation rotation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Contemplation {
    structure: usize,
    reflection: usize,
    /// Set while the "contemplating" pulse is showing
    pub thinking: bool,
}

impl Default for Contemplation {
    fn default() -> Self {
        Self {
            structure: 0,
            reflection: 0,
            thinking: true,
        }
    }
}

/// What the Think page currently shows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReflectionView {
    pub structure_id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    /// 1-based position within the structure's reflections
    pub position: usize,
    pub total: usize,
    pub text: &'static str,
    pub thinking: bool,
}

impl Contemplation {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn structure(&self) -> &'static CosmicStructure {
        &STRUCTURES[self.structure]
    }

    pub fn reflection(&self) -> &'static str {
        self.structure().reflections[self.reflection]
    }

    /// Moves to the next reflection of the current structure and starts the
    /// thinking pulse.
    pub fn advance_reflection(&mut self) {
        self.reflection = (self.reflection + 1) % self.structure().reflections.len();
        self.thinking = true;
    }

    /// Moves to the next structure, starting again at its first reflection.
    pub fn advance_structure(&mut self) {
        self.structure = (self.structure + 1) % STRUCTURES.len();
        self.reflection = 0;
    }

    /// Ends the thinking pulse.
    pub fn settle(&mut self) {
        self.thinking = false;
    }

    pub fn view(&self) -> ReflectionView {
        let structure = self.structure();
        ReflectionView {
            structure_id: structure.id,
            title: structure.title,
            description: structure.description,
            position: self.reflection + 1,
            total: structure.reflections.len(),
            text: self.reflection(),
            thinking: self.thinking,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reflection_counts() {
        let counts: Vec<usize> = STRUCTURES.iter().map(|s| s.reflections.len()).collect();
        assert_eq!(counts, vec![4, 4, 4, 5]);
    }

    #[test]
    fn test_reflection_wraps_within_structure() {
        let mut contemplation = Contemplation::new();
        for _ in 0..4 {
            contemplation.advance_reflection();
        }
        assert_eq!(contemplation.view().position, 1);
        assert_eq!(contemplation.structure().id, "finite-finite");
    }

    #[test]
    fn test_structure_advance_resets_reflection() {
        let mut contemplation = Contemplation::new();
        contemplation.advance_reflection();
        contemplation.advance_reflection();
        contemplation.advance_structure();

        let view = contemplation.view();
        assert_eq!(view.structure_id, "finite-infinite");
        assert_eq!(view.position, 1);
    }

    #[test]
    fn test_structure_wraps() {
        let mut contemplation = Contemplation::new();
        for _ in 0..STRUCTURES.len() {
            contemplation.advance_structure();
        }
        assert_eq!(contemplation.structure().id, "finite-finite");
    }

    #[test]
    fn test_thinking_pulse() {
        let mut contemplation = Contemplation::new();
        contemplation.settle();
        assert!(!contemplation.view().thinking);
        contemplation.advance_reflection();
        assert!(contemplation.view().thinking);
    }
}
