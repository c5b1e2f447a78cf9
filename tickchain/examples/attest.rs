use tickchain::{
    advance_point, advance_scalar, derive_key_from_seed, derive_point_from_scalar, sign, Signature,
};

fn main() {
    let scalar = derive_key_from_seed(b"example seed");
    let point = derive_point_from_scalar(&scalar);

    // The scalar holder advances privately; anyone holding the initial point
    // can track the same sequence of public values.
    let ticks = 12;
    let chained = advance_scalar(&scalar, ticks);
    let expected = advance_point(&point, ticks);
    assert_eq!(derive_point_from_scalar(&chained), expected);

    let msg = b"at tick 12";
    let sig = sign(&chained, msg, None);

    let sig_bytes = bincode::serialize(&sig).expect("serialize sig");
    let sig2: Signature = bincode::deserialize(&sig_bytes).expect("deserialize sig");
    assert!(sig2.verify(&expected, msg));

    println!("tick {ticks} attested");
    println!("public point: {}", hex::encode(expected.to_bytes()));
    println!("signature:    {}", hex::encode(sig2.to_bytes()));
}
