//! Static bone-name alias table used by the normalizer.

/// `(alias, canonical)` pairs. Aliases are matched exactly first, then
/// case-insensitively, then with surrounding whitespace trimmed.
pub(crate) const BONE_ALIASES: &[(&str, &str)] = &[
    // Mixamo (prefixed)
    ("mixamorig:Hips", " Pelvis"),
    ("mixamorig:Spine", " Spine"),
    ("mixamorig:Spine1", " Spine1"),
    ("mixamorig:Spine2", " Spine2"),
    ("mixamorig:Neck", " Neck"),
    ("mixamorig:Head", " Head"),
    ("mixamorig:LeftShoulder", " L Clavicle"),
    ("mixamorig:LeftArm", " L UpperArm"),
    ("mixamorig:LeftForeArm", " L Forearm"),
    ("mixamorig:LeftHand", " L Hand"),
    ("mixamorig:LeftHandThumb1", " L Finger0"),
    ("mixamorig:LeftHandThumb2", " L Finger0"),
    ("mixamorig:LeftHandThumb3", " L Finger0"),
    ("mixamorig:LeftHandIndex1", " L Finger1"),
    ("mixamorig:LeftHandIndex2", " L Finger1"),
    ("mixamorig:LeftHandIndex3", " L Finger1"),
    ("mixamorig:LeftHandMiddle1", " L Finger2"),
    ("mixamorig:LeftHandMiddle2", " L Finger2"),
    ("mixamorig:LeftHandMiddle3", " L Finger2"),
    ("mixamorig:LeftHandRing1", " L Finger3"),
    ("mixamorig:LeftHandRing2", " L Finger3"),
    ("mixamorig:LeftHandRing3", " L Finger3"),
    ("mixamorig:LeftHandPinky1", " L Finger4"),
    ("mixamorig:LeftHandPinky2", " L Finger4"),
    ("mixamorig:LeftHandPinky3", " L Finger4"),
    ("mixamorig:LeftUpLeg", " L Thigh"),
    ("mixamorig:LeftLeg", " L Calf"),
    ("mixamorig:LeftFoot", " L Foot"),
    ("mixamorig:LeftToeBase", " L Toe0"),
    ("mixamorig:RightShoulder", " R Clavicle"),
    ("mixamorig:RightArm", " R UpperArm"),
    ("mixamorig:RightForeArm", " R Forearm"),
    ("mixamorig:RightHand", " R Hand"),
    ("mixamorig:RightHandThumb1", " R Finger0"),
    ("mixamorig:RightHandThumb2", " R Finger0"),
    ("mixamorig:RightHandThumb3", " R Finger0"),
    ("mixamorig:RightHandIndex1", " R Finger1"),
    ("mixamorig:RightHandIndex2", " R Finger1"),
    ("mixamorig:RightHandIndex3", " R Finger1"),
    ("mixamorig:RightHandMiddle1", " R Finger2"),
    ("mixamorig:RightHandMiddle2", " R Finger2"),
    ("mixamorig:RightHandMiddle3", " R Finger2"),
    ("mixamorig:RightHandRing1", " R Finger3"),
    ("mixamorig:RightHandRing2", " R Finger3"),
    ("mixamorig:RightHandRing3", " R Finger3"),
    ("mixamorig:RightHandPinky1", " R Finger4"),
    ("mixamorig:RightHandPinky2", " R Finger4"),
    ("mixamorig:RightHandPinky3", " R Finger4"),
    ("mixamorig:RightUpLeg", " R Thigh"),
    ("mixamorig:RightLeg", " R Calf"),
    ("mixamorig:RightFoot", " R Foot"),
    ("mixamorig:RightToeBase", " R Toe0"),
    // Mixamo / Unity humanoid
    ("Hips", " Pelvis"),
    ("Spine", " Spine"),
    ("Spine1", " Spine1"),
    ("Spine2", " Spine2"),
    ("Neck", " Neck"),
    ("Head", " Head"),
    ("LeftShoulder", " L Clavicle"),
    ("LeftArm", " L UpperArm"),
    ("LeftForeArm", " L Forearm"),
    ("LeftHand", " L Hand"),
    ("LeftHandThumb1", " L Finger0"),
    ("LeftHandThumb2", " L Finger0"),
    ("LeftHandThumb3", " L Finger0"),
    ("LeftHandIndex1", " L Finger1"),
    ("LeftHandIndex2", " L Finger1"),
    ("LeftHandIndex3", " L Finger1"),
    ("LeftHandMiddle1", " L Finger2"),
    ("LeftHandMiddle2", " L Finger2"),
    ("LeftHandMiddle3", " L Finger2"),
    ("LeftHandRing1", " L Finger3"),
    ("LeftHandRing2", " L Finger3"),
    ("LeftHandRing3", " L Finger3"),
    ("LeftHandPinky1", " L Finger4"),
    ("LeftHandPinky2", " L Finger4"),
    ("LeftHandPinky3", " L Finger4"),
    ("LeftUpLeg", " L Thigh"),
    ("LeftLeg", " L Calf"),
    ("LeftFoot", " L Foot"),
    ("LeftToeBase", " L Toe0"),
    ("RightShoulder", " R Clavicle"),
    ("RightArm", " R UpperArm"),
    ("RightForeArm", " R Forearm"),
    ("RightHand", " R Hand"),
    ("RightHandThumb1", " R Finger0"),
    ("RightHandThumb2", " R Finger0"),
    ("RightHandThumb3", " R Finger0"),
    ("RightHandIndex1", " R Finger1"),
    ("RightHandIndex2", " R Finger1"),
    ("RightHandIndex3", " R Finger1"),
    ("RightHandMiddle1", " R Finger2"),
    ("RightHandMiddle2", " R Finger2"),
    ("RightHandMiddle3", " R Finger2"),
    ("RightHandRing1", " R Finger3"),
    ("RightHandRing2", " R Finger3"),
    ("RightHandRing3", " R Finger3"),
    ("RightHandPinky1", " R Finger4"),
    ("RightHandPinky2", " R Finger4"),
    ("RightHandPinky3", " R Finger4"),
    ("RightUpLeg", " R Thigh"),
    ("RightLeg", " R Calf"),
    ("RightFoot", " R Foot"),
    ("RightToeBase", " R Toe0"),
    // Unity / VRM humanoid
    ("Chest", " Spine1"),
    ("UpperChest", " Spine2"),
    ("hips", " Pelvis"),
    ("chest", " Spine1"),
    ("upperChest", " Spine2"),
    ("neck", " Neck"),
    ("head", " Head"),
    ("LeftUpperArm", " L UpperArm"),
    ("LeftLowerArm", " L Forearm"),
    ("LeftUpperLeg", " L Thigh"),
    ("LeftLowerLeg", " L Calf"),
    ("LeftToes", " L Toe0"),
    ("leftShoulder", " L Clavicle"),
    ("leftUpperArm", " L UpperArm"),
    ("leftLowerArm", " L Forearm"),
    ("leftHand", " L Hand"),
    ("leftUpperLeg", " L Thigh"),
    ("leftLowerLeg", " L Calf"),
    ("leftFoot", " L Foot"),
    ("leftToes", " L Toe0"),
    ("LeftThumbProximal", " L Finger0"),
    ("LeftThumbIntermediate", " L Finger0"),
    ("LeftThumbDistal", " L Finger0"),
    ("LeftIndexProximal", " L Finger1"),
    ("LeftIndexIntermediate", " L Finger1"),
    ("LeftIndexDistal", " L Finger1"),
    ("LeftMiddleProximal", " L Finger2"),
    ("LeftMiddleIntermediate", " L Finger2"),
    ("LeftMiddleDistal", " L Finger2"),
    ("LeftRingProximal", " L Finger3"),
    ("LeftRingIntermediate", " L Finger3"),
    ("LeftRingDistal", " L Finger3"),
    ("LeftLittleProximal", " L Finger4"),
    ("LeftLittleIntermediate", " L Finger4"),
    ("LeftLittleDistal", " L Finger4"),
    ("RightUpperArm", " R UpperArm"),
    ("RightLowerArm", " R Forearm"),
    ("RightUpperLeg", " R Thigh"),
    ("RightLowerLeg", " R Calf"),
    ("RightToes", " R Toe0"),
    ("rightShoulder", " R Clavicle"),
    ("rightUpperArm", " R UpperArm"),
    ("rightLowerArm", " R Forearm"),
    ("rightHand", " R Hand"),
    ("rightUpperLeg", " R Thigh"),
    ("rightLowerLeg", " R Calf"),
    ("rightFoot", " R Foot"),
    ("rightToes", " R Toe0"),
    ("RightThumbProximal", " R Finger0"),
    ("RightThumbIntermediate", " R Finger0"),
    ("RightThumbDistal", " R Finger0"),
    ("RightIndexProximal", " R Finger1"),
    ("RightIndexIntermediate", " R Finger1"),
    ("RightIndexDistal", " R Finger1"),
    ("RightMiddleProximal", " R Finger2"),
    ("RightMiddleIntermediate", " R Finger2"),
    ("RightMiddleDistal", " R Finger2"),
    ("RightRingProximal", " R Finger3"),
    ("RightRingIntermediate", " R Finger3"),
    ("RightRingDistal", " R Finger3"),
    ("RightLittleProximal", " R Finger4"),
    ("RightLittleIntermediate", " R Finger4"),
    ("RightLittleDistal", " R Finger4"),
    // VRoid
    ("J_Bip_C_Hips", " Pelvis"),
    ("J_Bip_C_Spine", " Spine"),
    ("J_Bip_C_Chest", " Spine1"),
    ("J_Bip_C_UpperChest", " Spine2"),
    ("J_Bip_C_Neck", " Neck"),
    ("J_Bip_C_Head", " Head"),
    ("J_Bip_L_Shoulder", " L Clavicle"),
    ("J_Bip_L_UpperArm", " L UpperArm"),
    ("J_Bip_L_LowerArm", " L Forearm"),
    ("J_Bip_L_Hand", " L Hand"),
    ("J_Bip_L_Thumb1", " L Finger0"),
    ("J_Bip_L_Thumb2", " L Finger0"),
    ("J_Bip_L_Thumb3", " L Finger0"),
    ("J_Bip_L_Index1", " L Finger1"),
    ("J_Bip_L_Index2", " L Finger1"),
    ("J_Bip_L_Index3", " L Finger1"),
    ("J_Bip_L_Middle1", " L Finger2"),
    ("J_Bip_L_Middle2", " L Finger2"),
    ("J_Bip_L_Middle3", " L Finger2"),
    ("J_Bip_L_Ring1", " L Finger3"),
    ("J_Bip_L_Ring2", " L Finger3"),
    ("J_Bip_L_Ring3", " L Finger3"),
    ("J_Bip_L_Little1", " L Finger4"),
    ("J_Bip_L_Little2", " L Finger4"),
    ("J_Bip_L_Little3", " L Finger4"),
    ("J_Bip_L_UpperLeg", " L Thigh"),
    ("J_Bip_L_LowerLeg", " L Calf"),
    ("J_Bip_L_Foot", " L Foot"),
    ("J_Bip_L_ToeBase", " L Toe0"),
    ("J_Bip_R_Shoulder", " R Clavicle"),
    ("J_Bip_R_UpperArm", " R UpperArm"),
    ("J_Bip_R_LowerArm", " R Forearm"),
    ("J_Bip_R_Hand", " R Hand"),
    ("J_Bip_R_Thumb1", " R Finger0"),
    ("J_Bip_R_Thumb2", " R Finger0"),
    ("J_Bip_R_Thumb3", " R Finger0"),
    ("J_Bip_R_Index1", " R Finger1"),
    ("J_Bip_R_Index2", " R Finger1"),
    ("J_Bip_R_Index3", " R Finger1"),
    ("J_Bip_R_Middle1", " R Finger2"),
    ("J_Bip_R_Middle2", " R Finger2"),
    ("J_Bip_R_Middle3", " R Finger2"),
    ("J_Bip_R_Ring1", " R Finger3"),
    ("J_Bip_R_Ring2", " R Finger3"),
    ("J_Bip_R_Ring3", " R Finger3"),
    ("J_Bip_R_Little1", " R Finger4"),
    ("J_Bip_R_Little2", " R Finger4"),
    ("J_Bip_R_Little3", " R Finger4"),
    ("J_Bip_R_UpperLeg", " R Thigh"),
    ("J_Bip_R_LowerLeg", " R Calf"),
    ("J_Bip_R_Foot", " R Foot"),
    ("J_Bip_R_ToeBase", " R Toe0"),
    // 3ds Max Biped (Bip01)
    ("Bip01 Pelvis", " Pelvis"),
    ("Bip01 Spine", " Spine"),
    ("Bip01 Spine1", " Spine1"),
    ("Bip01 Spine2", " Spine2"),
    ("Bip01 Neck", " Neck"),
    ("Bip01 Head", " Head"),
    ("Bip01 L Clavicle", " L Clavicle"),
    ("Bip01 L UpperArm", " L UpperArm"),
    ("Bip01 L Forearm", " L Forearm"),
    ("Bip01 L Hand", " L Hand"),
    ("Bip01 L Thigh", " L Thigh"),
    ("Bip01 L Calf", " L Calf"),
    ("Bip01 L Foot", " L Foot"),
    ("Bip01 L Toe0", " L Toe0"),
    ("Bip01 L Finger0", " L Finger0"),
    ("Bip01 L Finger01", " L Finger0"),
    ("Bip01 L Finger02", " L Finger0"),
    ("Bip01 L Finger1", " L Finger1"),
    ("Bip01 L Finger11", " L Finger1"),
    ("Bip01 L Finger12", " L Finger1"),
    ("Bip01 L Finger2", " L Finger2"),
    ("Bip01 L Finger21", " L Finger2"),
    ("Bip01 L Finger22", " L Finger2"),
    ("Bip01 L Finger3", " L Finger3"),
    ("Bip01 L Finger31", " L Finger3"),
    ("Bip01 L Finger32", " L Finger3"),
    ("Bip01 L Finger4", " L Finger4"),
    ("Bip01 L Finger41", " L Finger4"),
    ("Bip01 L Finger42", " L Finger4"),
    ("Bip01 R Clavicle", " R Clavicle"),
    ("Bip01 R UpperArm", " R UpperArm"),
    ("Bip01 R Forearm", " R Forearm"),
    ("Bip01 R Hand", " R Hand"),
    ("Bip01 R Thigh", " R Thigh"),
    ("Bip01 R Calf", " R Calf"),
    ("Bip01 R Foot", " R Foot"),
    ("Bip01 R Toe0", " R Toe0"),
    ("Bip01 R Finger0", " R Finger0"),
    ("Bip01 R Finger01", " R Finger0"),
    ("Bip01 R Finger02", " R Finger0"),
    ("Bip01 R Finger1", " R Finger1"),
    ("Bip01 R Finger11", " R Finger1"),
    ("Bip01 R Finger12", " R Finger1"),
    ("Bip01 R Finger2", " R Finger2"),
    ("Bip01 R Finger21", " R Finger2"),
    ("Bip01 R Finger22", " R Finger2"),
    ("Bip01 R Finger3", " R Finger3"),
    ("Bip01 R Finger31", " R Finger3"),
    ("Bip01 R Finger32", " R Finger3"),
    ("Bip01 R Finger4", " R Finger4"),
    ("Bip01 R Finger41", " R Finger4"),
    ("Bip01 R Finger42", " R Finger4"),
    // 3ds Max Biped (Bip001)
    ("Bip001 Pelvis", " Pelvis"),
    ("Bip001 Spine", " Spine"),
    ("Bip001 Spine1", " Spine1"),
    ("Bip001 Spine2", " Spine2"),
    ("Bip001 Neck", " Neck"),
    ("Bip001 Head", " Head"),
    ("Bip001 L Clavicle", " L Clavicle"),
    ("Bip001 L UpperArm", " L UpperArm"),
    ("Bip001 L Forearm", " L Forearm"),
    ("Bip001 L Hand", " L Hand"),
    ("Bip001 L Thigh", " L Thigh"),
    ("Bip001 L Calf", " L Calf"),
    ("Bip001 L Foot", " L Foot"),
    ("Bip001 L Toe0", " L Toe0"),
    ("Bip001 L Finger0", " L Finger0"),
    ("Bip001 L Finger01", " L Finger0"),
    ("Bip001 L Finger02", " L Finger0"),
    ("Bip001 L Finger1", " L Finger1"),
    ("Bip001 L Finger11", " L Finger1"),
    ("Bip001 L Finger12", " L Finger1"),
    ("Bip001 L Finger2", " L Finger2"),
    ("Bip001 L Finger21", " L Finger2"),
    ("Bip001 L Finger22", " L Finger2"),
    ("Bip001 L Finger3", " L Finger3"),
    ("Bip001 L Finger31", " L Finger3"),
    ("Bip001 L Finger32", " L Finger3"),
    ("Bip001 L Finger4", " L Finger4"),
    ("Bip001 L Finger41", " L Finger4"),
    ("Bip001 L Finger42", " L Finger4"),
    ("Bip001 R Clavicle", " R Clavicle"),
    ("Bip001 R UpperArm", " R UpperArm"),
    ("Bip001 R Forearm", " R Forearm"),
    ("Bip001 R Hand", " R Hand"),
    ("Bip001 R Thigh", " R Thigh"),
    ("Bip001 R Calf", " R Calf"),
    ("Bip001 R Foot", " R Foot"),
    ("Bip001 R Toe0", " R Toe0"),
    ("Bip001 R Finger0", " R Finger0"),
    ("Bip001 R Finger01", " R Finger0"),
    ("Bip001 R Finger02", " R Finger0"),
    ("Bip001 R Finger1", " R Finger1"),
    ("Bip001 R Finger11", " R Finger1"),
    ("Bip001 R Finger12", " R Finger1"),
    ("Bip001 R Finger2", " R Finger2"),
    ("Bip001 R Finger21", " R Finger2"),
    ("Bip001 R Finger22", " R Finger2"),
    ("Bip001 R Finger3", " R Finger3"),
    ("Bip001 R Finger31", " R Finger3"),
    ("Bip001 R Finger32", " R Finger3"),
    ("Bip001 R Finger4", " R Finger4"),
    ("Bip001 R Finger41", " R Finger4"),
    ("Bip001 R Finger42", " R Finger4"),
    // Valve Biped
    ("ValveBiped.Bip01_Pelvis", " Pelvis"),
    ("ValveBiped.Bip01_Spine", " Spine"),
    ("ValveBiped.Bip01_Spine1", " Spine1"),
    ("ValveBiped.Bip01_Spine2", " Spine2"),
    ("ValveBiped.Bip01_Spine4", " Spine2"),
    ("ValveBiped.Bip01_Neck1", " Neck"),
    ("ValveBiped.Bip01_Head1", " Head"),
    ("ValveBiped.Bip01_L_Clavicle", " L Clavicle"),
    ("ValveBiped.Bip01_L_UpperArm", " L UpperArm"),
    ("ValveBiped.Bip01_L_Forearm", " L Forearm"),
    ("ValveBiped.Bip01_L_Hand", " L Hand"),
    ("ValveBiped.Bip01_L_Thigh", " L Thigh"),
    ("ValveBiped.Bip01_L_Calf", " L Calf"),
    ("ValveBiped.Bip01_L_Foot", " L Foot"),
    ("ValveBiped.Bip01_L_Toe0", " L Toe0"),
    ("ValveBiped.Bip01_L_Finger0", " L Finger0"),
    ("ValveBiped.Bip01_L_Finger01", " L Finger0"),
    ("ValveBiped.Bip01_L_Finger02", " L Finger0"),
    ("ValveBiped.Bip01_L_Finger1", " L Finger1"),
    ("ValveBiped.Bip01_L_Finger11", " L Finger1"),
    ("ValveBiped.Bip01_L_Finger12", " L Finger1"),
    ("ValveBiped.Bip01_L_Finger2", " L Finger2"),
    ("ValveBiped.Bip01_L_Finger21", " L Finger2"),
    ("ValveBiped.Bip01_L_Finger22", " L Finger2"),
    ("ValveBiped.Bip01_L_Finger3", " L Finger3"),
    ("ValveBiped.Bip01_L_Finger31", " L Finger3"),
    ("ValveBiped.Bip01_L_Finger32", " L Finger3"),
    ("ValveBiped.Bip01_L_Finger4", " L Finger4"),
    ("ValveBiped.Bip01_L_Finger41", " L Finger4"),
    ("ValveBiped.Bip01_L_Finger42", " L Finger4"),
    ("ValveBiped.Bip01_R_Clavicle", " R Clavicle"),
    ("ValveBiped.Bip01_R_UpperArm", " R UpperArm"),
    ("ValveBiped.Bip01_R_Forearm", " R Forearm"),
    ("ValveBiped.Bip01_R_Hand", " R Hand"),
    ("ValveBiped.Bip01_R_Thigh", " R Thigh"),
    ("ValveBiped.Bip01_R_Calf", " R Calf"),
    ("ValveBiped.Bip01_R_Foot", " R Foot"),
    ("ValveBiped.Bip01_R_Toe0", " R Toe0"),
    ("ValveBiped.Bip01_R_Finger0", " R Finger0"),
    ("ValveBiped.Bip01_R_Finger01", " R Finger0"),
    ("ValveBiped.Bip01_R_Finger02", " R Finger0"),
    ("ValveBiped.Bip01_R_Finger1", " R Finger1"),
    ("ValveBiped.Bip01_R_Finger11", " R Finger1"),
    ("ValveBiped.Bip01_R_Finger12", " R Finger1"),
    ("ValveBiped.Bip01_R_Finger2", " R Finger2"),
    ("ValveBiped.Bip01_R_Finger21", " R Finger2"),
    ("ValveBiped.Bip01_R_Finger22", " R Finger2"),
    ("ValveBiped.Bip01_R_Finger3", " R Finger3"),
    ("ValveBiped.Bip01_R_Finger31", " R Finger3"),
    ("ValveBiped.Bip01_R_Finger32", " R Finger3"),
    ("ValveBiped.Bip01_R_Finger4", " R Finger4"),
    ("ValveBiped.Bip01_R_Finger41", " R Finger4"),
    ("ValveBiped.Bip01_R_Finger42", " R Finger4"),
    // Unreal mannequin
    ("pelvis", " Pelvis"),
    ("spine_01", " Spine"),
    ("spine_02", " Spine1"),
    ("spine_03", " Spine2"),
    ("spine_04", " Spine2"),
    ("spine_05", " Spine2"),
    ("neck_01", " Neck"),
    ("neck_02", " Neck"),
    ("clavicle_l", " L Clavicle"),
    ("upperarm_l", " L UpperArm"),
    ("lowerarm_l", " L Forearm"),
    ("hand_l", " L Hand"),
    ("thumb_01_l", " L Finger0"),
    ("thumb_02_l", " L Finger0"),
    ("thumb_03_l", " L Finger0"),
    ("index_01_l", " L Finger1"),
    ("index_02_l", " L Finger1"),
    ("index_03_l", " L Finger1"),
    ("middle_01_l", " L Finger2"),
    ("middle_02_l", " L Finger2"),
    ("middle_03_l", " L Finger2"),
    ("ring_01_l", " L Finger3"),
    ("ring_02_l", " L Finger3"),
    ("ring_03_l", " L Finger3"),
    ("pinky_01_l", " L Finger4"),
    ("pinky_02_l", " L Finger4"),
    ("pinky_03_l", " L Finger4"),
    ("thigh_l", " L Thigh"),
    ("calf_l", " L Calf"),
    ("foot_l", " L Foot"),
    ("ball_l", " L Toe0"),
    ("clavicle_r", " R Clavicle"),
    ("upperarm_r", " R UpperArm"),
    ("lowerarm_r", " R Forearm"),
    ("hand_r", " R Hand"),
    ("thumb_01_r", " R Finger0"),
    ("thumb_02_r", " R Finger0"),
    ("thumb_03_r", " R Finger0"),
    ("index_01_r", " R Finger1"),
    ("index_02_r", " R Finger1"),
    ("index_03_r", " R Finger1"),
    ("middle_01_r", " R Finger2"),
    ("middle_02_r", " R Finger2"),
    ("middle_03_r", " R Finger2"),
    ("ring_01_r", " R Finger3"),
    ("ring_02_r", " R Finger3"),
    ("ring_03_r", " R Finger3"),
    ("pinky_01_r", " R Finger4"),
    ("pinky_02_r", " R Finger4"),
    ("pinky_03_r", " R Finger4"),
    ("thigh_r", " R Thigh"),
    ("calf_r", " R Calf"),
    ("foot_r", " R Foot"),
    ("ball_r", " R Toe0"),
    // Blender Rigify metarig
    ("spine.001", " Spine"),
    ("spine.002", " Spine1"),
    ("spine.003", " Spine2"),
    ("spine.004", " Neck"),
    ("spine.005", " Neck"),
    ("spine.006", " Head"),
    ("shoulder.L", " L Clavicle"),
    ("upper_arm.L", " L UpperArm"),
    ("forearm.L", " L Forearm"),
    ("hand.L", " L Hand"),
    ("thumb.01.L", " L Finger0"),
    ("thumb.02.L", " L Finger0"),
    ("thumb.03.L", " L Finger0"),
    ("f_index.01.L", " L Finger1"),
    ("f_index.02.L", " L Finger1"),
    ("f_index.03.L", " L Finger1"),
    ("f_middle.01.L", " L Finger2"),
    ("f_middle.02.L", " L Finger2"),
    ("f_middle.03.L", " L Finger2"),
    ("f_ring.01.L", " L Finger3"),
    ("f_ring.02.L", " L Finger3"),
    ("f_ring.03.L", " L Finger3"),
    ("f_pinky.01.L", " L Finger4"),
    ("f_pinky.02.L", " L Finger4"),
    ("f_pinky.03.L", " L Finger4"),
    ("thigh.L", " L Thigh"),
    ("shin.L", " L Calf"),
    ("foot.L", " L Foot"),
    ("toe.L", " L Toe0"),
    ("shoulder.R", " R Clavicle"),
    ("upper_arm.R", " R UpperArm"),
    ("forearm.R", " R Forearm"),
    ("hand.R", " R Hand"),
    ("thumb.01.R", " R Finger0"),
    ("thumb.02.R", " R Finger0"),
    ("thumb.03.R", " R Finger0"),
    ("f_index.01.R", " R Finger1"),
    ("f_index.02.R", " R Finger1"),
    ("f_index.03.R", " R Finger1"),
    ("f_middle.01.R", " R Finger2"),
    ("f_middle.02.R", " R Finger2"),
    ("f_middle.03.R", " R Finger2"),
    ("f_ring.01.R", " R Finger3"),
    ("f_ring.02.R", " R Finger3"),
    ("f_ring.03.R", " R Finger3"),
    ("f_pinky.01.R", " R Finger4"),
    ("f_pinky.02.R", " R Finger4"),
    ("f_pinky.03.R", " R Finger4"),
    ("thigh.R", " R Thigh"),
    ("shin.R", " R Calf"),
    ("foot.R", " R Foot"),
    ("toe.R", " R Toe0"),
    // Blender Rigify deform bones
    ("DEF-spine", " Pelvis"),
    ("DEF-spine.001", " Spine"),
    ("DEF-spine.002", " Spine1"),
    ("DEF-spine.003", " Spine2"),
    ("DEF-spine.004", " Neck"),
    ("DEF-spine.005", " Neck"),
    ("DEF-spine.006", " Head"),
    ("DEF-shoulder.L", " L Clavicle"),
    ("DEF-upper_arm.L", " L UpperArm"),
    ("DEF-forearm.L", " L Forearm"),
    ("DEF-hand.L", " L Hand"),
    ("DEF-thumb.01.L", " L Finger0"),
    ("DEF-thumb.02.L", " L Finger0"),
    ("DEF-thumb.03.L", " L Finger0"),
    ("DEF-f_index.01.L", " L Finger1"),
    ("DEF-f_index.02.L", " L Finger1"),
    ("DEF-f_index.03.L", " L Finger1"),
    ("DEF-f_middle.01.L", " L Finger2"),
    ("DEF-f_middle.02.L", " L Finger2"),
    ("DEF-f_middle.03.L", " L Finger2"),
    ("DEF-f_ring.01.L", " L Finger3"),
    ("DEF-f_ring.02.L", " L Finger3"),
    ("DEF-f_ring.03.L", " L Finger3"),
    ("DEF-f_pinky.01.L", " L Finger4"),
    ("DEF-f_pinky.02.L", " L Finger4"),
    ("DEF-f_pinky.03.L", " L Finger4"),
    ("DEF-thigh.L", " L Thigh"),
    ("DEF-shin.L", " L Calf"),
    ("DEF-foot.L", " L Foot"),
    ("DEF-toe.L", " L Toe0"),
    ("DEF-shoulder.R", " R Clavicle"),
    ("DEF-upper_arm.R", " R UpperArm"),
    ("DEF-forearm.R", " R Forearm"),
    ("DEF-hand.R", " R Hand"),
    ("DEF-thumb.01.R", " R Finger0"),
    ("DEF-thumb.02.R", " R Finger0"),
    ("DEF-thumb.03.R", " R Finger0"),
    ("DEF-f_index.01.R", " R Finger1"),
    ("DEF-f_index.02.R", " R Finger1"),
    ("DEF-f_index.03.R", " R Finger1"),
    ("DEF-f_middle.01.R", " R Finger2"),
    ("DEF-f_middle.02.R", " R Finger2"),
    ("DEF-f_middle.03.R", " R Finger2"),
    ("DEF-f_ring.01.R", " R Finger3"),
    ("DEF-f_ring.02.R", " R Finger3"),
    ("DEF-f_ring.03.R", " R Finger3"),
    ("DEF-f_pinky.01.R", " R Finger4"),
    ("DEF-f_pinky.02.R", " R Finger4"),
    ("DEF-f_pinky.03.R", " R Finger4"),
    ("DEF-thigh.R", " R Thigh"),
    ("DEF-shin.R", " R Calf"),
    ("DEF-foot.R", " R Foot"),
    ("DEF-toe.R", " R Toe0"),
    // Generic side conventions
    ("Pelvis", " Pelvis"),
    ("Clavicle.L", " L Clavicle"),
    ("Clavicle_L", " L Clavicle"),
    ("L_Clavicle", " L Clavicle"),
    ("LeftClavicle", " L Clavicle"),
    ("Left_Clavicle", " L Clavicle"),
    ("L Clavicle", " L Clavicle"),
    ("Shoulder.L", " L Clavicle"),
    ("Shoulder_L", " L Clavicle"),
    ("L_Shoulder", " L Clavicle"),
    ("Left_Shoulder", " L Clavicle"),
    ("L Shoulder", " L Clavicle"),
    ("UpperArm.L", " L UpperArm"),
    ("UpperArm_L", " L UpperArm"),
    ("L_UpperArm", " L UpperArm"),
    ("Left_UpperArm", " L UpperArm"),
    ("L UpperArm", " L UpperArm"),
    ("Forearm.L", " L Forearm"),
    ("Forearm_L", " L Forearm"),
    ("L_Forearm", " L Forearm"),
    ("LeftForearm", " L Forearm"),
    ("Left_Forearm", " L Forearm"),
    ("L Forearm", " L Forearm"),
    ("LowerArm.L", " L Forearm"),
    ("LowerArm_L", " L Forearm"),
    ("L_LowerArm", " L Forearm"),
    ("Left_LowerArm", " L Forearm"),
    ("L LowerArm", " L Forearm"),
    ("Hand.L", " L Hand"),
    ("Hand_L", " L Hand"),
    ("L_Hand", " L Hand"),
    ("Left_Hand", " L Hand"),
    ("L Hand", " L Hand"),
    ("Thumb.L", " L Finger0"),
    ("Thumb_L", " L Finger0"),
    ("L_Thumb", " L Finger0"),
    ("LeftThumb", " L Finger0"),
    ("Left_Thumb", " L Finger0"),
    ("L Thumb", " L Finger0"),
    ("Index.L", " L Finger1"),
    ("Index_L", " L Finger1"),
    ("L_Index", " L Finger1"),
    ("LeftIndex", " L Finger1"),
    ("Left_Index", " L Finger1"),
    ("L Index", " L Finger1"),
    ("Middle.L", " L Finger2"),
    ("Middle_L", " L Finger2"),
    ("L_Middle", " L Finger2"),
    ("LeftMiddle", " L Finger2"),
    ("Left_Middle", " L Finger2"),
    ("L Middle", " L Finger2"),
    ("Ring.L", " L Finger3"),
    ("Ring_L", " L Finger3"),
    ("L_Ring", " L Finger3"),
    ("LeftRing", " L Finger3"),
    ("Left_Ring", " L Finger3"),
    ("L Ring", " L Finger3"),
    ("Pinky.L", " L Finger4"),
    ("Pinky_L", " L Finger4"),
    ("L_Pinky", " L Finger4"),
    ("LeftPinky", " L Finger4"),
    ("Left_Pinky", " L Finger4"),
    ("L Pinky", " L Finger4"),
    ("Little.L", " L Finger4"),
    ("Little_L", " L Finger4"),
    ("L_Little", " L Finger4"),
    ("LeftLittle", " L Finger4"),
    ("Left_Little", " L Finger4"),
    ("L Little", " L Finger4"),
    ("Thigh.L", " L Thigh"),
    ("Thigh_L", " L Thigh"),
    ("L_Thigh", " L Thigh"),
    ("LeftThigh", " L Thigh"),
    ("Left_Thigh", " L Thigh"),
    ("L Thigh", " L Thigh"),
    ("UpperLeg.L", " L Thigh"),
    ("UpperLeg_L", " L Thigh"),
    ("L_UpperLeg", " L Thigh"),
    ("Left_UpperLeg", " L Thigh"),
    ("L UpperLeg", " L Thigh"),
    ("Calf.L", " L Calf"),
    ("Calf_L", " L Calf"),
    ("L_Calf", " L Calf"),
    ("LeftCalf", " L Calf"),
    ("Left_Calf", " L Calf"),
    ("L Calf", " L Calf"),
    ("Shin.L", " L Calf"),
    ("Shin_L", " L Calf"),
    ("L_Shin", " L Calf"),
    ("LeftShin", " L Calf"),
    ("Left_Shin", " L Calf"),
    ("L Shin", " L Calf"),
    ("LowerLeg.L", " L Calf"),
    ("LowerLeg_L", " L Calf"),
    ("L_LowerLeg", " L Calf"),
    ("Left_LowerLeg", " L Calf"),
    ("L LowerLeg", " L Calf"),
    ("Foot.L", " L Foot"),
    ("Foot_L", " L Foot"),
    ("L_Foot", " L Foot"),
    ("Left_Foot", " L Foot"),
    ("L Foot", " L Foot"),
    ("Toe.L", " L Toe0"),
    ("Toe_L", " L Toe0"),
    ("L_Toe", " L Toe0"),
    ("LeftToe", " L Toe0"),
    ("Left_Toe", " L Toe0"),
    ("L Toe", " L Toe0"),
    ("Toes.L", " L Toe0"),
    ("Toes_L", " L Toe0"),
    ("L_Toes", " L Toe0"),
    ("Left_Toes", " L Toe0"),
    ("L Toes", " L Toe0"),
    ("ToeBase.L", " L Toe0"),
    ("ToeBase_L", " L Toe0"),
    ("L_ToeBase", " L Toe0"),
    ("Left_ToeBase", " L Toe0"),
    ("L ToeBase", " L Toe0"),
    ("Clavicle.R", " R Clavicle"),
    ("Clavicle_R", " R Clavicle"),
    ("R_Clavicle", " R Clavicle"),
    ("RightClavicle", " R Clavicle"),
    ("Right_Clavicle", " R Clavicle"),
    ("R Clavicle", " R Clavicle"),
    ("Shoulder.R", " R Clavicle"),
    ("Shoulder_R", " R Clavicle"),
    ("R_Shoulder", " R Clavicle"),
    ("Right_Shoulder", " R Clavicle"),
    ("R Shoulder", " R Clavicle"),
    ("UpperArm.R", " R UpperArm"),
    ("UpperArm_R", " R UpperArm"),
    ("R_UpperArm", " R UpperArm"),
    ("Right_UpperArm", " R UpperArm"),
    ("R UpperArm", " R UpperArm"),
    ("Forearm.R", " R Forearm"),
    ("Forearm_R", " R Forearm"),
    ("R_Forearm", " R Forearm"),
    ("RightForearm", " R Forearm"),
    ("Right_Forearm", " R Forearm"),
    ("R Forearm", " R Forearm"),
    ("LowerArm.R", " R Forearm"),
    ("LowerArm_R", " R Forearm"),
    ("R_LowerArm", " R Forearm"),
    ("Right_LowerArm", " R Forearm"),
    ("R LowerArm", " R Forearm"),
    ("Hand.R", " R Hand"),
    ("Hand_R", " R Hand"),
    ("R_Hand", " R Hand"),
    ("Right_Hand", " R Hand"),
    ("R Hand", " R Hand"),
    ("Thumb.R", " R Finger0"),
    ("Thumb_R", " R Finger0"),
    ("R_Thumb", " R Finger0"),
    ("RightThumb", " R Finger0"),
    ("Right_Thumb", " R Finger0"),
    ("R Thumb", " R Finger0"),
    ("Index.R", " R Finger1"),
    ("Index_R", " R Finger1"),
    ("R_Index", " R Finger1"),
    ("RightIndex", " R Finger1"),
    ("Right_Index", " R Finger1"),
    ("R Index", " R Finger1"),
    ("Middle.R", " R Finger2"),
    ("Middle_R", " R Finger2"),
    ("R_Middle", " R Finger2"),
    ("RightMiddle", " R Finger2"),
    ("Right_Middle", " R Finger2"),
    ("R Middle", " R Finger2"),
    ("Ring.R", " R Finger3"),
    ("Ring_R", " R Finger3"),
    ("R_Ring", " R Finger3"),
    ("RightRing", " R Finger3"),
    ("Right_Ring", " R Finger3"),
    ("R Ring", " R Finger3"),
    ("Pinky.R", " R Finger4"),
    ("Pinky_R", " R Finger4"),
    ("R_Pinky", " R Finger4"),
    ("RightPinky", " R Finger4"),
    ("Right_Pinky", " R Finger4"),
    ("R Pinky", " R Finger4"),
    ("Little.R", " R Finger4"),
    ("Little_R", " R Finger4"),
    ("R_Little", " R Finger4"),
    ("RightLittle", " R Finger4"),
    ("Right_Little", " R Finger4"),
    ("R Little", " R Finger4"),
    ("Thigh.R", " R Thigh"),
    ("Thigh_R", " R Thigh"),
    ("R_Thigh", " R Thigh"),
    ("RightThigh", " R Thigh"),
    ("Right_Thigh", " R Thigh"),
    ("R Thigh", " R Thigh"),
    ("UpperLeg.R", " R Thigh"),
    ("UpperLeg_R", " R Thigh"),
    ("R_UpperLeg", " R Thigh"),
    ("Right_UpperLeg", " R Thigh"),
    ("R UpperLeg", " R Thigh"),
    ("Calf.R", " R Calf"),
    ("Calf_R", " R Calf"),
    ("R_Calf", " R Calf"),
    ("RightCalf", " R Calf"),
    ("Right_Calf", " R Calf"),
    ("R Calf", " R Calf"),
    ("Shin.R", " R Calf"),
    ("Shin_R", " R Calf"),
    ("R_Shin", " R Calf"),
    ("RightShin", " R Calf"),
    ("Right_Shin", " R Calf"),
    ("R Shin", " R Calf"),
    ("LowerLeg.R", " R Calf"),
    ("LowerLeg_R", " R Calf"),
    ("R_LowerLeg", " R Calf"),
    ("Right_LowerLeg", " R Calf"),
    ("R LowerLeg", " R Calf"),
    ("Foot.R", " R Foot"),
    ("Foot_R", " R Foot"),
    ("R_Foot", " R Foot"),
    ("Right_Foot", " R Foot"),
    ("R Foot", " R Foot"),
    ("Toe.R", " R Toe0"),
    ("Toe_R", " R Toe0"),
    ("R_Toe", " R Toe0"),
    ("RightToe", " R Toe0"),
    ("Right_Toe", " R Toe0"),
    ("R Toe", " R Toe0"),
    ("Toes.R", " R Toe0"),
    ("Toes_R", " R Toe0"),
    ("R_Toes", " R Toe0"),
    ("Right_Toes", " R Toe0"),
    ("R Toes", " R Toe0"),
    ("ToeBase.R", " R Toe0"),
    ("ToeBase_R", " R Toe0"),
    ("R_ToeBase", " R Toe0"),
    ("Right_ToeBase", " R Toe0"),
    ("R ToeBase", " R Toe0"),
    // MikuMikuDance (Japanese)
    ("下半身", " Pelvis"),
    ("上半身", " Spine"),
    ("上半身2", " Spine1"),
    ("上半身3", " Spine2"),
    ("首", " Neck"),
    ("頭", " Head"),
    ("左肩", " L Clavicle"),
    ("左腕", " L UpperArm"),
    ("左ひじ", " L Forearm"),
    ("左手首", " L Hand"),
    ("左親指０", " L Finger0"),
    ("左親指１", " L Finger0"),
    ("左親指２", " L Finger0"),
    ("左人指１", " L Finger1"),
    ("左人指２", " L Finger1"),
    ("左人指３", " L Finger1"),
    ("左中指１", " L Finger2"),
    ("左中指２", " L Finger2"),
    ("左中指３", " L Finger2"),
    ("左薬指１", " L Finger3"),
    ("左薬指２", " L Finger3"),
    ("左薬指３", " L Finger3"),
    ("左小指１", " L Finger4"),
    ("左小指２", " L Finger4"),
    ("左小指３", " L Finger4"),
    ("左足", " L Thigh"),
    ("左ひざ", " L Calf"),
    ("左足首", " L Foot"),
    ("左つま先", " L Toe0"),
    ("右肩", " R Clavicle"),
    ("右腕", " R UpperArm"),
    ("右ひじ", " R Forearm"),
    ("右手首", " R Hand"),
    ("右親指０", " R Finger0"),
    ("右親指１", " R Finger0"),
    ("右親指２", " R Finger0"),
    ("右人指１", " R Finger1"),
    ("右人指２", " R Finger1"),
    ("右人指３", " R Finger1"),
    ("右中指１", " R Finger2"),
    ("右中指２", " R Finger2"),
    ("右中指３", " R Finger2"),
    ("右薬指１", " R Finger3"),
    ("右薬指２", " R Finger3"),
    ("右薬指３", " R Finger3"),
    ("右小指１", " R Finger4"),
    ("右小指２", " R Finger4"),
    ("右小指３", " R Finger4"),
    ("右足", " R Thigh"),
    ("右ひざ", " R Calf"),
    ("右足首", " R Foot"),
    ("右つま先", " R Toe0"),
];
