//! Account and storage flows as a front end would drive them.

use cryptocanvas_core::secret::{codec_for, PayloadCodec, SealedCodec};
use cryptocanvas_core::store::{DirImageStore, ImageStore, MemoryCredentialStore};
use cryptocanvas_core::{Authenticator, CanvasError, Carrier, KdfParams, Secret, StegoOptions};
use image::{ImageBuffer, Rgb, RgbImage};
use tempfile::TempDir;

const FAST_KDF: KdfParams = KdfParams {
    t_cost: 1,
    m_cost: 64,
    p_cost: 1,
};

fn carrier_png() -> Vec<u8> {
    let image: RgbImage = ImageBuffer::from_fn(48, 48, |x, y| Rgb([x as u8 * 5, y as u8 * 5, 90]));
    Carrier::from_image(image.into(), &StegoOptions::default())
        .unwrap()
        .to_png_bytes()
        .unwrap()
}

#[test]
fn signed_in_user_stores_and_reads_back_a_stego_image() {
    let root = TempDir::new().unwrap();
    let mut images = DirImageStore::new(root.path());
    let mut auth = Authenticator::new(MemoryCredentialStore::new());
    auth.sign_up("ada@example.org", "Ada", "hunter42").unwrap();
    let owner = auth.sign_in("ada@example.org", "hunter42").unwrap().user_id;

    let codec = SealedCodec::new("canvas-pw").with_params(FAST_KDF);
    let payload = codec.encode(&Secret::text("meet at noon")).unwrap();
    let mut carrier = Carrier::from_bytes(&carrier_png(), &StegoOptions::default()).unwrap();
    carrier.hide(&payload).unwrap();
    images
        .put(owner, "postcard.png", &carrier.to_png_bytes().unwrap())
        .unwrap();

    let stored = images.get(owner, "postcard.png").unwrap();
    let revealed = Carrier::from_bytes(&stored, &StegoOptions::default())
        .unwrap()
        .reveal()
        .unwrap();
    let secret = codec_for(Some("canvas-pw"), FAST_KDF)
        .decode(&revealed)
        .unwrap();

    assert_eq!(secret.into_text().unwrap(), "meet at noon");
    assert!(auth.sign_out().is_some());
}

#[test]
fn encrypted_image_survives_the_store() {
    let root = TempDir::new().unwrap();
    let mut images = DirImageStore::new(root.path());
    let plain = carrier_png();

    let envelope = cryptocanvas_seal::Envelope::seal(&FAST_KDF, &plain, b"Tr0ub4dor&3").unwrap();
    images.put(7, "cat.png.enc", &envelope.to_bytes()).unwrap();

    let stored = images.get(7, "cat.png.enc").unwrap();
    let opened = cryptocanvas_seal::Envelope::from_bytes(&stored)
        .unwrap()
        .open(&FAST_KDF, b"Tr0ub4dor&3")
        .unwrap();
    assert_eq!(opened, plain);

    assert!(matches!(images.get(8, "cat.png.enc"), Err(CanvasError::NotFound)));
}

#[test]
fn asking_for_the_wrong_kind_fails() {
    let mut carrier = Carrier::from_bytes(&carrier_png(), &StegoOptions::default()).unwrap();
    carrier
        .hide(&Secret::text("just text").to_payload())
        .unwrap();

    let secret = Secret::from_payload(&carrier.reveal().unwrap()).unwrap();

    assert!(matches!(
        secret.into_image(),
        Err(CanvasError::UnexpectedSecretKind { .. })
    ));
}
