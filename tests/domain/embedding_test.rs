use docrag::domain::Embedding;

const EPSILON: f32 = 1e-5;

#[test]
fn given_identical_vectors_when_compared_then_similarity_is_one() {
    let a = Embedding::new(vec![0.5, 1.0, -2.0]);
    let b = a.clone();

    assert!((a.cosine_similarity(&b) - 1.0).abs() < EPSILON);
}

#[test]
fn given_orthogonal_vectors_when_compared_then_similarity_is_zero() {
    let a = Embedding::new(vec![1.0, 0.0]);
    let b = Embedding::new(vec![0.0, 1.0]);

    assert!(a.cosine_similarity(&b).abs() < EPSILON);
}

#[test]
fn given_opposite_vectors_when_compared_then_similarity_is_negative_one() {
    let a = Embedding::new(vec![1.0, 2.0]);
    let b = Embedding::new(vec![-1.0, -2.0]);

    assert!((a.cosine_similarity(&b) + 1.0).abs() < EPSILON);
}

#[test]
fn given_mismatched_dimensions_when_compared_then_similarity_is_zero() {
    let a = Embedding::new(vec![1.0, 2.0, 3.0]);
    let b = Embedding::new(vec![1.0, 2.0]);

    assert_eq!(a.cosine_similarity(&b), 0.0);
}

#[test]
fn given_a_zero_vector_when_compared_then_similarity_is_zero() {
    let a = Embedding::new(vec![0.0, 0.0]);
    let b = Embedding::new(vec![1.0, 2.0]);

    assert_eq!(a.cosine_similarity(&b), 0.0);
}

#[test]
fn given_values_when_asking_dimensions_then_the_length_is_reported() {
    assert_eq!(Embedding::new(vec![0.0; 384]).dimensions(), 384);
}
